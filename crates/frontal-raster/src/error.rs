//! Error types for the renderer.

use thiserror::Error;

/// Errors that can occur while setting up or running an off-screen render.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The off-screen buffer or camera context could not be created.
    #[error("render backend unavailable: {0}")]
    BackendUnavailable(String),
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RasterError>;
