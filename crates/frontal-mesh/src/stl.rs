//! STL reading and writing.
//!
//! Supports both binary and ASCII STL. Vertices are kept as a triangle soup
//! (no deduplication) since the estimator only needs bounds and per-triangle
//! corner positions.

use std::fs;
use std::path::Path;

use frontal_math::Point3;

use crate::error::{MeshError, Result};
use crate::TriangleMesh;

/// Binary STL record size: normal + 3 vertices (12 f32) + attribute count.
const RECORD_SIZE: usize = 50;
/// Binary STL header size plus the triangle-count field.
const HEADER_SIZE: usize = 84;

/// Load an STL file, auto-detecting binary vs ASCII.
pub fn read_stl(path: impl AsRef<Path>) -> Result<TriangleMesh> {
    let bytes = fs::read(path)?;
    let mesh = if is_ascii_stl(&bytes) {
        parse_ascii(&bytes)?
    } else {
        parse_binary(&bytes)?
    };
    if mesh.indices.is_empty() {
        return Err(MeshError::Empty);
    }
    Ok(mesh)
}

/// Write a mesh as binary STL.
pub fn write_stl(path: impl AsRef<Path>, mesh: &TriangleMesh) -> Result<()> {
    fs::write(path, to_binary_bytes(mesh))?;
    Ok(())
}

/// Encode a mesh as binary STL bytes.
pub fn to_binary_bytes(mesh: &TriangleMesh) -> Vec<u8> {
    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(HEADER_SIZE + num_triangles * RECORD_SIZE);

    let mut header = [0u8; 80];
    let tag = b"frontal STL export";
    header[..tag.len()].copy_from_slice(tag);
    data.extend_from_slice(&header);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for t in 0..num_triangles {
        let [v0, v1, v2] = mesh.triangle(t);
        let n = facet_normal(&v0, &v1, &v2);
        for c in n {
            data.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for v in [v0, v1, v2] {
            data.extend_from_slice(&(v.x as f32).to_le_bytes());
            data.extend_from_slice(&(v.y as f32).to_le_bytes());
            data.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    data
}

fn facet_normal(v0: &Point3, v1: &Point3, v2: &Point3) -> [f64; 3] {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let n = e1.cross(&e2);
    let len = n.norm();
    if len > 1e-10 {
        [n.x / len, n.y / len, n.z / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// ASCII files start with "solid" and contain a "facet" keyword. The header
/// check alone is not enough: some binary exporters also write "solid" into
/// the 80-byte header.
fn is_ascii_stl(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    text.trim_start().starts_with("solid") && text.contains("facet")
}

fn parse_binary(bytes: &[u8]) -> Result<TriangleMesh> {
    if bytes.len() < HEADER_SIZE {
        return Err(MeshError::Parse("file shorter than STL header".into()));
    }
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    let expected = HEADER_SIZE + count * RECORD_SIZE;
    if bytes.len() < expected {
        return Err(MeshError::Parse(format!(
            "expected {} triangles but file holds only {} bytes of data",
            count,
            bytes.len() - HEADER_SIZE
        )));
    }

    let mut mesh = TriangleMesh::new();
    for t in 0..count {
        let rec = &bytes[HEADER_SIZE + t * RECORD_SIZE..HEADER_SIZE + (t + 1) * RECORD_SIZE];
        // Skip the 12-byte normal, read three vertices
        let mut pts = [Point3::origin(); 3];
        for (v, pt) in pts.iter_mut().enumerate() {
            let base = 12 + v * 12;
            let x = f32::from_le_bytes(rec[base..base + 4].try_into().unwrap());
            let y = f32::from_le_bytes(rec[base + 4..base + 8].try_into().unwrap());
            let z = f32::from_le_bytes(rec[base + 8..base + 12].try_into().unwrap());
            *pt = Point3::new(x as f64, y as f64, z as f64);
        }
        mesh.push_triangle(pts[0], pts[1], pts[2]);
    }
    Ok(mesh)
}

fn parse_ascii(bytes: &[u8]) -> Result<TriangleMesh> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| MeshError::Parse("ASCII STL is not valid UTF-8".into()))?;

    let mut mesh = TriangleMesh::new();
    let mut pending: Vec<Point3> = Vec::with_capacity(3);

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("vertex") {
            let coords: Vec<f64> = rest
                .split_whitespace()
                .map(|w| {
                    w.parse::<f64>().map_err(|_| {
                        MeshError::Parse(format!("bad vertex coordinate on line {}", lineno + 1))
                    })
                })
                .collect::<Result<_>>()?;
            if coords.len() != 3 {
                return Err(MeshError::Parse(format!(
                    "expected 3 vertex coordinates on line {}",
                    lineno + 1
                )));
            }
            pending.push(Point3::new(coords[0], coords[1], coords[2]));
        } else if line.starts_with("endfacet") {
            if pending.len() != 3 {
                return Err(MeshError::Parse(format!(
                    "facet ending on line {} has {} vertices",
                    lineno + 1,
                    pending.len()
                )));
            }
            mesh.push_triangle(pending[0], pending[1], pending[2]);
            pending.clear();
        }
    }
    Ok(mesh)
}
