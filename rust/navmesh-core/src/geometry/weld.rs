use rustc_hash::FxHashMap;

use crate::error::MeshError;
use crate::models::Point;

// Grid keys at or beyond 2^63 would saturate in the i64 cast.
const KEY_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Stitches a triangle soup into a shared vertex pool.
///
/// Coordinates are snapped to a grid of cell size `quantum`; vertices that
/// land in the same cell become one index, keeping the first coordinate seen.
/// Only meant for meshes that were not produced with a shared index space.
pub fn weld(triangles: &[[Point; 3]], quantum: f64) -> Result<(Vec<Point>, Vec<u32>), MeshError> {
    if !(quantum.is_finite() && quantum > 0.0) {
        return Err(MeshError::InvalidQuantum(quantum));
    }

    let mut vertices: Vec<Point> = Vec::new();
    let mut indices: Vec<u32> = Vec::with_capacity(triangles.len() * 3);
    let mut cells: FxHashMap<(i64, i64), u32> = FxHashMap::default();

    for (t, tri) in triangles.iter().enumerate() {
        for (k, p) in tri.iter().enumerate() {
            let vertex = (t * 3 + k) as u32;
            if !(p[0].is_finite() && p[1].is_finite()) {
                return Err(MeshError::NonFiniteVertex(vertex));
            }
            let (kx, ky) = ((p[0] / quantum).round(), (p[1] / quantum).round());
            if kx.abs() >= KEY_LIMIT || ky.abs() >= KEY_LIMIT {
                return Err(MeshError::WeldOutOfRange { vertex, quantum });
            }
            let key = (kx as i64, ky as i64);
            let idx = *cells.entry(key).or_insert_with(|| {
                vertices.push(*p);
                (vertices.len() - 1) as u32
            });
            indices.push(idx);
        }
    }

    tracing::debug!(input = triangles.len() * 3, welded = vertices.len(), quantum, "welded triangle soup");
    Ok((vertices, indices))
}
