//! Orthographic view configuration for a mesh and projection axis.

use frontal_mesh::TriangleMesh;
use frontal_raster::OrthoCamera;

use crate::axis::Axis;
use crate::error::{AreaError, Result};

/// Extents below this are treated as no extent at all.
const EXTENT_TOL: f64 = 1e-12;

/// Derive a camera that frames the mesh silhouette tightly and centered.
///
/// The eye sits one unit behind the centroid along the projection axis (the
/// distance is irrelevant under orthographic projection), the focal point is
/// the centroid, and the up vector is the axis's fixed pair. The camera is
/// then fit to the mesh bounds, which sets `parallel_scale` to half the
/// larger silhouette extent.
pub fn fit_view(mesh: &TriangleMesh, axis: Axis) -> Result<OrthoCamera> {
    let bounds = mesh
        .bounds()
        .ok_or_else(|| AreaError::DegenerateMesh("mesh has no vertices".into()))?;
    if bounds.is_degenerate(EXTENT_TOL) {
        return Err(AreaError::DegenerateMesh(
            "bounding box collapses to a single point".into(),
        ));
    }

    let centroid = bounds.center();
    let mut camera = OrthoCamera::new(centroid - axis.direction(), centroid, axis.view_up());
    camera.reset_to_bounds(&bounds);

    if camera.parallel_scale <= EXTENT_TOL {
        return Err(AreaError::DegenerateMesh(format!(
            "no extent perpendicular to the {} axis",
            axis
        )));
    }
    Ok(camera)
}
