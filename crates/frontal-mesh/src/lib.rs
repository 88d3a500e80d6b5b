#![warn(missing_docs)]

//! Triangle mesh handle for the frontal projected-area estimator.
//!
//! A mesh is an immutable triangle soup: flat vertex and index buffers plus
//! derived bounding box and centroid. The estimator only ever reads it.

use frontal_math::{Aabb3, Point3};

pub mod error;
pub mod stl;

pub use error::{MeshError, Result};

/// An in-memory triangulated surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex position `i` as a point.
    pub fn vertex(&self, i: usize) -> Point3 {
        Point3::new(
            self.vertices[i * 3] as f64,
            self.vertices[i * 3 + 1] as f64,
            self.vertices[i * 3 + 2] as f64,
        )
    }

    /// The three corner points of triangle `i`.
    pub fn triangle(&self, i: usize) -> [Point3; 3] {
        let i0 = self.indices[i * 3] as usize;
        let i1 = self.indices[i * 3 + 1] as usize;
        let i2 = self.indices[i * 3 + 2] as usize;
        [self.vertex(i0), self.vertex(i1), self.vertex(i2)]
    }

    /// Append a triangle from three explicit corner points.
    pub fn push_triangle(&mut self, a: Point3, b: Point3, c: Point3) {
        let base = self.num_vertices() as u32;
        for p in [a, b, c] {
            self.vertices.push(p.x as f32);
            self.vertices.push(p.y as f32);
            self.vertices.push(p.z as f32);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Axis-aligned bounding box over all vertices.
    ///
    /// Returns `None` for a mesh with no vertices.
    pub fn bounds(&self) -> Option<Aabb3> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut aabb = Aabb3::empty();
        for i in 0..self.num_vertices() {
            aabb.include_point(&self.vertex(i));
        }
        Some(aabb)
    }

    /// Geometric center of the bounding box.
    pub fn centroid(&self) -> Option<Point3> {
        self.bounds().map(|b| b.center())
    }
}
