#![warn(missing_docs)]

//! Headless orthographic silhouette renderer.
//!
//! Renders a triangle mesh as a flat black silhouette on a white background
//! into an off-screen RGBA buffer. Entirely CPU-side: no window, no GPU
//! context, safe to run in any environment.

pub mod camera;
pub mod error;
pub mod framebuffer;
pub mod rasterize;

pub use camera::OrthoCamera;
pub use error::{RasterError, Result};
pub use framebuffer::Framebuffer;
pub use rasterize::render_silhouette;

/// Background color: opaque white.
///
/// Chosen so the first channel can never collide with mesh pixels; pixel
/// classification keys on channel 0 being exactly 255. This constant and
/// [`SILHOUETTE`] form the color contract between rendering and counting.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Silhouette color: opaque black.
pub const SILHOUETTE: [u8; 4] = [0, 0, 0, 255];
