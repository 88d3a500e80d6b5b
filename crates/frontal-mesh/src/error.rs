//! Error types for mesh loading.

use thiserror::Error;

/// Errors that can occur while reading or writing a mesh file.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Underlying file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents did not parse as STL.
    #[error("invalid STL data: {0}")]
    Parse(String),

    /// File parsed but contained no triangles.
    #[error("mesh file contains no triangles")]
    Empty,
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
