//! Orthographic silhouette rasterization.
//!
//! Projects mesh triangles onto the camera's image plane and fills them with
//! the silhouette color using edge functions sampled at pixel centers. No
//! depth buffer: every triangle paints the same flat color, which is all a
//! silhouette needs.

use frontal_math::Point3;
use frontal_mesh::TriangleMesh;

use crate::camera::OrthoCamera;
use crate::error::{RasterError, Result};
use crate::framebuffer::Framebuffer;
use crate::SILHOUETTE;

/// 2D cross product of `(b - a)` and `(p - a)`.
///
/// Positive when `p` lies to the left of the directed edge `a -> b`.
#[inline]
fn edge_function(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> f64 {
    (p[0] - a[0]) * (b[1] - a[1]) - (p[1] - a[1]) * (b[0] - a[0])
}

/// Render the mesh silhouette into a fresh `width x height` buffer.
///
/// The background is opaque white and covered pixels are opaque black; see
/// [`BACKGROUND`](crate::BACKGROUND) and [`SILHOUETTE`](crate::SILHOUETTE)
/// for the contract shared with pixel classification.
pub fn render_silhouette(
    mesh: &TriangleMesh,
    camera: &OrthoCamera,
    width: u32,
    height: u32,
) -> Result<Framebuffer> {
    let mut fb = Framebuffer::new(width, height)?;

    let (right, up) = camera.basis().ok_or_else(|| {
        RasterError::BackendUnavailable("camera basis is degenerate".into())
    })?;
    let ps = camera.parallel_scale;
    if !(ps > 0.0) {
        return Err(RasterError::BackendUnavailable(format!(
            "parallel scale {} is not positive",
            ps
        )));
    }

    // Map a world point to continuous pixel coordinates. The frame spans
    // [-ps, ps] in both in-plane directions; image y grows downward.
    let to_screen = |p: &Point3| {
        let rel = p - camera.focal_point;
        let h = rel.dot(&right);
        let v = rel.dot(&up);
        [
            (h + ps) / (2.0 * ps) * width as f64,
            (ps - v) / (2.0 * ps) * height as f64,
        ]
    };

    for t in 0..mesh.num_triangles() {
        let [p0, p1, p2] = mesh.triangle(t);
        let v0 = to_screen(&p0);
        let v1 = to_screen(&p1);
        let v2 = to_screen(&p2);
        fill_triangle(&mut fb, v0, v1, v2);
    }

    Ok(fb)
}

/// Fill one screen-space triangle with the silhouette color.
fn fill_triangle(fb: &mut Framebuffer, v0: [f64; 2], v1: [f64; 2], v2: [f64; 2]) {
    // Signed area doubles as the winding test; skip edge-on triangles
    let area = edge_function(v0, v1, v2);
    if area.abs() < f64::EPSILON {
        return;
    }

    let min_x = (v0[0].min(v1[0]).min(v2[0]).floor() as i64).max(0);
    let max_x = (v0[0].max(v1[0]).max(v2[0]).ceil() as i64).min(fb.width() as i64 - 1);
    let min_y = (v0[1].min(v1[1]).min(v2[1]).floor() as i64).max(0);
    let max_y = (v0[1].max(v1[1]).max(v2[1]).ceil() as i64).min(fb.height() as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f64 + 0.5, y as f64 + 0.5];
            let w0 = edge_function(v1, v2, p);
            let w1 = edge_function(v2, v0, p);
            let w2 = edge_function(v0, v1, p);

            // Inside test that accepts both windings
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };

            if inside {
                fb.set_pixel(x as u32, y as u32, SILHOUETTE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontal_math::{Aabb3, Vec3};

    fn looking_down_z(scale: f64) -> OrthoCamera {
        let mut cam = OrthoCamera::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::origin(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        cam.parallel_scale = scale;
        cam
    }

    fn quad_mesh(half: f64) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        let a = Point3::new(-half, -half, 0.0);
        let b = Point3::new(half, -half, 0.0);
        let c = Point3::new(half, half, 0.0);
        let d = Point3::new(-half, half, 0.0);
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
        mesh
    }

    fn count_black(fb: &Framebuffer) -> usize {
        fb.pixels().chunks_exact(4).filter(|px| px[0] == 0).count()
    }

    #[test]
    fn test_full_frame_quad_covers_everything() {
        let mesh = quad_mesh(1.0);
        let fb = render_silhouette(&mesh, &looking_down_z(1.0), 64, 64).unwrap();
        assert_eq!(count_black(&fb), 64 * 64);
    }

    #[test]
    fn test_half_frame_quad() {
        // Quad spans half the frame in each direction: a quarter of the pixels
        let mesh = quad_mesh(0.5);
        let fb = render_silhouette(&mesh, &looking_down_z(1.0), 64, 64).unwrap();
        assert_eq!(count_black(&fb), 32 * 32);
    }

    #[test]
    fn test_empty_mesh_renders_background() {
        let mesh = TriangleMesh::new();
        let fb = render_silhouette(&mesh, &looking_down_z(1.0), 16, 16).unwrap();
        assert_eq!(count_black(&fb), 0);
        assert_eq!(fb.pixel(8, 8), crate::BACKGROUND);
    }

    #[test]
    fn test_edge_on_triangle_covers_nothing() {
        // Triangle in the xz plane viewed along z projects to a line
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Point3::new(-0.5, 0.0, 0.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.5),
        );
        let fb = render_silhouette(&mesh, &looking_down_z(1.0), 64, 64).unwrap();
        assert_eq!(count_black(&fb), 0);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let mut ccw = TriangleMesh::new();
        ccw.push_triangle(
            Point3::new(-0.8, -0.8, 0.0),
            Point3::new(0.8, -0.8, 0.0),
            Point3::new(0.0, 0.8, 0.0),
        );
        let mut cw = TriangleMesh::new();
        cw.push_triangle(
            Point3::new(-0.8, -0.8, 0.0),
            Point3::new(0.0, 0.8, 0.0),
            Point3::new(0.8, -0.8, 0.0),
        );
        let cam = looking_down_z(1.0);
        let a = render_silhouette(&ccw, &cam, 64, 64).unwrap();
        let b = render_silhouette(&cw, &cam, 64, 64).unwrap();
        assert_eq!(count_black(&a), count_black(&b));
        assert!(count_black(&a) > 0);
    }

    #[test]
    fn test_geometry_outside_frame_is_clipped() {
        let mesh = quad_mesh(10.0);
        let fb = render_silhouette(&mesh, &looking_down_z(1.0), 32, 32).unwrap();
        assert_eq!(count_black(&fb), 32 * 32);
    }

    #[test]
    fn test_zero_scale_is_backend_error() {
        let mesh = quad_mesh(1.0);
        let result = render_silhouette(&mesh, &looking_down_z(0.0), 32, 32);
        assert!(matches!(result, Err(RasterError::BackendUnavailable(_))));
    }

    #[test]
    fn test_fit_then_render_fills_frame() {
        let mesh = quad_mesh(0.7);
        let mut cam = OrthoCamera::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::origin(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        cam.reset_to_bounds(&Aabb3::new(
            Point3::new(-0.7, -0.7, 0.0),
            Point3::new(0.7, 0.7, 0.0),
        ));
        let fb = render_silhouette(&mesh, &cam, 48, 48).unwrap();
        assert_eq!(count_black(&fb), 48 * 48);
    }
}
