//! Orthographic camera with bounds-driven auto-fit.

use frontal_math::{Aabb3, Point3, Vec3};

/// An orthographic (parallel-projection) camera.
///
/// `parallel_scale` is the half-height of the visible physical extent; under
/// the square-frame convention used throughout this workspace it is also the
/// half-width. The full frame therefore spans `2 * parallel_scale` in each
/// direction.
#[derive(Debug, Clone)]
pub struct OrthoCamera {
    /// Eye position. Distance to the focal point is irrelevant for the
    /// projected image size; only the direction matters.
    pub position: Point3,
    /// Point the camera looks at; becomes the center of the frame.
    pub focal_point: Point3,
    /// Up hint; must not be parallel to the view direction.
    pub view_up: Vec3,
    /// Half-extent of the visible frame in physical units.
    pub parallel_scale: f64,
}

impl OrthoCamera {
    /// Camera looking from `position` toward `focal_point` with the given up
    /// hint and a unit parallel scale.
    pub fn new(position: Point3, focal_point: Point3, view_up: Vec3) -> Self {
        Self {
            position,
            focal_point,
            view_up,
            parallel_scale: 1.0,
        }
    }

    /// Orthonormal in-plane frame `(right, up)` of the image plane.
    ///
    /// Returns `None` when the camera is degenerate (zero-length view
    /// direction, or up hint parallel to the view direction).
    pub fn basis(&self) -> Option<(Vec3, Vec3)> {
        let view = self.focal_point - self.position;
        if view.norm() < 1e-12 {
            return None;
        }
        let dir = view.normalize();
        let right = dir.cross(&self.view_up);
        if right.norm() < 1e-12 {
            return None;
        }
        let right = right.normalize();
        let up = right.cross(&dir);
        Some((right, up))
    }

    /// Fit `parallel_scale` so the box's silhouette exactly fills the frame.
    ///
    /// Projects the box corners onto the image plane and takes the larger
    /// half-extent about the focal point. The camera is always orthographic,
    /// so a single fit after posing is sufficient. Leaves the scale untouched
    /// when the camera basis is degenerate; a zero scale (point-like box on
    /// the image plane) is left at zero for the caller to reject.
    pub fn reset_to_bounds(&mut self, bounds: &Aabb3) {
        let Some((right, up)) = self.basis() else {
            return;
        };
        let mut half = 0.0f64;
        for corner in bounds.corners() {
            let rel = corner - self.focal_point;
            half = half.max(rel.dot(&right).abs());
            half = half.max(rel.dot(&up).abs());
        }
        self.parallel_scale = half;
    }
}
