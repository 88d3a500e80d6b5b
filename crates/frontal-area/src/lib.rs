#![warn(missing_docs)]

//! Rasterization-based projected-area estimation.
//!
//! Estimates the orthographic silhouette area of a triangle mesh viewed
//! along a cartesian axis: fit an orthographic camera around the mesh,
//! render the silhouette black-on-white into an off-screen buffer, count
//! covered pixels, and convert the count to physical area via the known
//! per-pixel footprint.
//!
//! ```no_run
//! use frontal_area::{estimate_projected_area, Axis, DEFAULT_SCALE};
//! # fn main() -> frontal_area::Result<()> {
//! # let mesh = frontal_mesh::TriangleMesh::new();
//! let projection = estimate_projected_area(&mesh, Axis::X, DEFAULT_SCALE)?;
//! println!("frontal area: {} units^2", projection.area);
//! # Ok(())
//! # }
//! ```
//!
//! Every call is a pure function of `(mesh, axis, scale)`: no state is
//! shared between calls and each render owns its buffer, so callers are free
//! to estimate several meshes or axes in parallel.

use frontal_mesh::TriangleMesh;
use frontal_raster::{render_silhouette, Framebuffer, OrthoCamera};
use serde::Serialize;

pub mod axis;
pub mod coverage;
pub mod error;
pub mod view;

pub use axis::Axis;
pub use error::{AreaError, Result};

/// Logical frame size before supersampling, in pixels per side.
pub const BASE_FRAME_SIZE: u32 = 300;

/// Default supersampling scale (600x600 output).
pub const DEFAULT_SCALE: u32 = 2;

/// Result of one estimation call, with the diagnostic pixel counts.
///
/// `area == covered_pixels as f64 * resolution` holds exactly, by
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    /// Estimated silhouette area, in squared mesh units.
    pub area: f64,
    /// Physical area of one pixel, in squared mesh units.
    pub resolution: f64,
    /// Pixels classified as covered by the silhouette.
    pub covered_pixels: usize,
    /// Total pixels in the rendered buffer.
    pub total_pixels: usize,
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels (always equal to the width).
    pub height: u32,
}

/// Fit a view for `axis` and render the mesh silhouette at `scale`.
///
/// Exposed so callers can reach the raw buffer (image dumps, counting
/// cross-checks); [`estimate_projected_area`] is this plus classification.
pub fn render_axis_view(
    mesh: &TriangleMesh,
    axis: Axis,
    scale: u32,
) -> Result<(Framebuffer, OrthoCamera)> {
    if scale == 0 {
        return Err(AreaError::InvalidScale(scale));
    }
    let camera = view::fit_view(mesh, axis)?;
    let size = BASE_FRAME_SIZE
        .checked_mul(scale)
        .ok_or(AreaError::InvalidScale(scale))?;
    let fb = render_silhouette(mesh, &camera, size, size)?;
    Ok((fb, camera))
}

/// Estimate the projected silhouette area of `mesh` along `axis`.
///
/// `scale` multiplies the 300x300 logical frame in both directions, trading
/// an `O(scale^2)` increase in render and classification cost for a
/// proportionally smaller discretization error. An all-background render
/// yields `area = 0.0`, which is a valid empty silhouette, not an error.
pub fn estimate_projected_area(mesh: &TriangleMesh, axis: Axis, scale: u32) -> Result<Projection> {
    let (fb, camera) = render_axis_view(mesh, axis, scale)?;
    Ok(estimate_from_buffer(&fb, &camera))
}

/// Classify and aggregate an already-rendered buffer.
pub fn estimate_from_buffer(fb: &Framebuffer, camera: &OrthoCamera) -> Projection {
    let resolution = coverage::resolution(camera.parallel_scale, fb.width());
    let covered = coverage::count_covered(fb);

    Projection {
        area: covered as f64 * resolution,
        resolution,
        covered_pixels: covered,
        total_pixels: fb.num_pixels(),
        width: fb.width(),
        height: fb.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontal_math::Point3;

    fn unit_quad_in_yz() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        let a = Point3::new(0.0, -0.5, -0.5);
        let b = Point3::new(0.0, 0.5, -0.5);
        let c = Point3::new(0.0, 0.5, 0.5);
        let d = Point3::new(0.0, -0.5, 0.5);
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
        mesh
    }

    #[test]
    fn test_zero_scale_rejected_before_rendering() {
        let mesh = unit_quad_in_yz();
        assert!(matches!(
            estimate_projected_area(&mesh, Axis::X, 0),
            Err(AreaError::InvalidScale(0))
        ));
    }

    #[test]
    fn test_output_dimensions_scale() {
        let mesh = unit_quad_in_yz();
        let p = estimate_projected_area(&mesh, Axis::X, 1).unwrap();
        assert_eq!((p.width, p.height), (300, 300));
        assert_eq!(p.total_pixels, 300 * 300);
        let p = estimate_projected_area(&mesh, Axis::X, 3).unwrap();
        assert_eq!((p.width, p.height), (900, 900));
    }

    #[test]
    fn test_quad_faces_x_fills_frame() {
        let mesh = unit_quad_in_yz();
        let p = estimate_projected_area(&mesh, Axis::X, 2).unwrap();
        assert_eq!(p.covered_pixels, p.total_pixels);
        assert!((p.area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quad_edge_on_is_empty() {
        // The same quad seen along z is a line: zero covered pixels, valid
        let mesh = unit_quad_in_yz();
        let p = estimate_projected_area(&mesh, Axis::Z, 2).unwrap();
        assert_eq!(p.covered_pixels, 0);
        assert_eq!(p.area, 0.0);
        assert!(p.resolution > 0.0);
    }

    #[test]
    fn test_area_is_count_times_resolution_exactly() {
        let mesh = unit_quad_in_yz();
        let p = estimate_projected_area(&mesh, Axis::X, 2).unwrap();
        assert_eq!(p.area, p.covered_pixels as f64 * p.resolution);
    }
}
