//! Error types for area estimation.

use frontal_raster::RasterError;
use thiserror::Error;

/// Errors that can occur during a projected-area estimation call.
///
/// All variants are local to a single call; the estimator holds no state
/// between calls, so a failure never leaves anything inconsistent.
#[derive(Error, Debug)]
pub enum AreaError {
    /// Mesh has no positive extent perpendicular to the view direction, so
    /// no finite camera scale can frame it.
    #[error("degenerate mesh: {0}")]
    DegenerateMesh(String),

    /// Requested projection axis is not one of x, y, z.
    #[error("unsupported projection axis {0:?} (expected x, y or z)")]
    UnsupportedAxis(String),

    /// Supersampling scale must be a positive integer.
    #[error("invalid supersampling scale {0} (must be a positive integer)")]
    InvalidScale(u32),

    /// The off-screen render context could not be created.
    #[error(transparent)]
    Render(#[from] RasterError),
}

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, AreaError>;
