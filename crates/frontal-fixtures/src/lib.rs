#![warn(missing_docs)]

//! Canonical tessellated shapes used as estimation fixtures.
//!
//! All shapes are centered at the origin. These are convenience meshes for
//! tests and for the CLI `fixtures` subcommand; they are not part of the
//! estimation algorithm itself.

use std::f64::consts::PI;

use frontal_math::Point3;
use frontal_mesh::TriangleMesh;

/// Axis-aligned box with dimensions `(sx, sy, sz)`, centered at the origin.
///
/// 12 triangles with outward winding (CCW viewed from outside).
pub fn cube(sx: f64, sy: f64, sz: f64) -> TriangleMesh {
    let (hx, hy, hz) = (sx * 0.5, sy * 0.5, sz * 0.5);
    let v = [
        Point3::new(-hx, -hy, -hz),
        Point3::new(hx, -hy, -hz),
        Point3::new(hx, hy, -hz),
        Point3::new(-hx, hy, -hz),
        Point3::new(-hx, -hy, hz),
        Point3::new(hx, -hy, hz),
        Point3::new(hx, hy, hz),
        Point3::new(-hx, hy, hz),
    ];
    // Each face as four corner indices in CCW order viewed from outside
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom (-z)
        [4, 5, 6, 7], // top (+z)
        [0, 1, 5, 4], // front (-y)
        [2, 3, 7, 6], // back (+y)
        [0, 4, 7, 3], // left (-x)
        [1, 2, 6, 5], // right (+x)
    ];

    let mut mesh = TriangleMesh::new();
    for f in faces {
        mesh.push_triangle(v[f[0]], v[f[1]], v[f[2]]);
        mesh.push_triangle(v[f[0]], v[f[2]], v[f[3]]);
    }
    mesh
}

/// UV sphere of the given radius.
///
/// `segments` is the longitude resolution; latitude uses `segments / 2`
/// bands. Matches the classic source-object convention where a single
/// resolution knob drives both directions.
pub fn sphere(radius: f64, segments: u32) -> TriangleMesh {
    let theta_steps = segments.max(3);
    let phi_steps = (segments / 2).max(2);

    let point = |phi: f64, theta: f64| {
        Point3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        )
    };

    let mut mesh = TriangleMesh::new();
    for i in 0..phi_steps {
        let phi0 = PI * i as f64 / phi_steps as f64;
        let phi1 = PI * (i + 1) as f64 / phi_steps as f64;
        for j in 0..theta_steps {
            let theta0 = 2.0 * PI * j as f64 / theta_steps as f64;
            let theta1 = 2.0 * PI * (j + 1) as f64 / theta_steps as f64;

            let p00 = point(phi0, theta0);
            let p01 = point(phi0, theta1);
            let p10 = point(phi1, theta0);
            let p11 = point(phi1, theta1);

            // Pole bands collapse one quad edge; emit a single triangle there
            if i > 0 {
                mesh.push_triangle(p00, p10, p01);
            }
            if i + 1 < phi_steps {
                mesh.push_triangle(p01, p10, p11);
            }
        }
    }
    mesh
}

/// Cone with a circular base of `radius`, total `height`, axis +Z,
/// centered so the base sits at `z = -height/2` and the apex at `+height/2`.
pub fn cone(radius: f64, height: f64, segments: u32) -> TriangleMesh {
    let n = segments.max(3);
    let half = height * 0.5;
    let apex = Point3::new(0.0, 0.0, half);
    let base_center = Point3::new(0.0, 0.0, -half);

    let rim = |j: u32| {
        let theta = 2.0 * PI * (j % n) as f64 / n as f64;
        Point3::new(radius * theta.cos(), radius * theta.sin(), -half)
    };

    let mut mesh = TriangleMesh::new();
    for j in 0..n {
        let a = rim(j);
        let b = rim(j + 1);
        mesh.push_triangle(a, b, apex);
        mesh.push_triangle(b, a, base_center);
    }
    mesh
}

/// Flat annular disk in the XY plane (`z = 0`) with the given inner and
/// outer radii. Zero thickness: edge-on silhouettes have (near) zero area.
pub fn disk(inner_radius: f64, outer_radius: f64, segments: u32) -> TriangleMesh {
    let n = segments.max(3);

    let ring = |r: f64, j: u32| {
        let theta = 2.0 * PI * (j % n) as f64 / n as f64;
        Point3::new(r * theta.cos(), r * theta.sin(), 0.0)
    };

    let mut mesh = TriangleMesh::new();
    for j in 0..n {
        let i0 = ring(inner_radius, j);
        let i1 = ring(inner_radius, j + 1);
        let o0 = ring(outer_radius, j);
        let o1 = ring(outer_radius, j + 1);
        mesh.push_triangle(i0, o0, o1);
        mesh.push_triangle(i0, o1, i1);
    }
    mesh
}

/// Torus in the XY plane: `ring_radius` from the center to the tube center,
/// `tube_radius` for the tube itself.
pub fn torus(ring_radius: f64, tube_radius: f64, segments: u32) -> TriangleMesh {
    let u_steps = segments.max(3);
    let v_steps = (segments / 2).max(3);

    let point = |u: f64, v: f64| {
        let c = ring_radius + tube_radius * v.cos();
        Point3::new(c * u.cos(), c * u.sin(), tube_radius * v.sin())
    };

    let mut mesh = TriangleMesh::new();
    for i in 0..u_steps {
        let u0 = 2.0 * PI * i as f64 / u_steps as f64;
        let u1 = 2.0 * PI * (i + 1) as f64 / u_steps as f64;
        for j in 0..v_steps {
            let v0 = 2.0 * PI * j as f64 / v_steps as f64;
            let v1 = 2.0 * PI * (j + 1) as f64 / v_steps as f64;

            let p00 = point(u0, v0);
            let p01 = point(u0, v1);
            let p10 = point(u1, v0);
            let p11 = point(u1, v1);

            mesh.push_triangle(p00, p10, p11);
            mesh.push_triangle(p00, p11, p01);
        }
    }
    mesh
}

/// A mesh collapsed to a single point. Degenerate by construction; used to
/// exercise the estimator's degenerate-extent error path.
pub fn point_mesh(p: Point3) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    mesh.push_triangle(p, p, p);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_bounds() {
        let mesh = cube(1.0, 2.0, 3.0);
        assert_eq!(mesh.num_triangles(), 12);
        let b = mesh.bounds().unwrap();
        assert!((b.min.x + 0.5).abs() < 1e-6);
        assert!((b.max.y - 1.0).abs() < 1e-6);
        assert!((b.max.z - 1.5).abs() < 1e-6);
        let c = mesh.centroid().unwrap();
        assert!(c.coords.norm() < 1e-6);
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let mesh = sphere(2.0, 32);
        for i in 0..mesh.num_vertices() {
            let r = mesh.vertex(i).coords.norm();
            assert!((r - 2.0).abs() < 1e-6, "vertex {} at radius {}", i, r);
        }
    }

    #[test]
    fn test_cone_extent() {
        let mesh = cone(1.0, 2.0, 64);
        let b = mesh.bounds().unwrap();
        assert!((b.min.z + 1.0).abs() < 1e-6);
        assert!((b.max.z - 1.0).abs() < 1e-6);
        assert!((b.max.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_disk_is_flat() {
        let mesh = disk(0.5, 1.0, 64);
        let b = mesh.bounds().unwrap();
        assert!(b.extents().z.abs() < 1e-12);
        assert!((b.max.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_torus_extent() {
        let mesh = torus(1.0, 0.5, 64);
        let b = mesh.bounds().unwrap();
        assert!((b.max.x - 1.5).abs() < 1e-2);
        assert!((b.max.z - 0.5).abs() < 1e-2);
    }

    #[test]
    fn test_point_mesh_degenerate() {
        let mesh = point_mesh(Point3::new(1.0, 2.0, 3.0));
        assert!(mesh.bounds().unwrap().is_degenerate(1e-9));
    }
}
