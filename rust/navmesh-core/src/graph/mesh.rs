use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MeshError;
use crate::geometry::{centroid, orient, point_in_triangle, weld};
use crate::models::{Point, TriangleId};
use crate::options::{NavOptions, Winding};

/// One navmesh triangle, stored counter-clockwise under the mesh winding.
///
/// Edge `i` runs from `verts[i]` to `verts[(i + 1) % 3]`; `neighbors[i]` is
/// the triangle on the other side of that edge, `None` on the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub verts: [Point; 3],
    pub indices: [u32; 3],
    pub centroid: Point,
    pub neighbors: [Option<TriangleId>; 3],
}

impl Triangle {
    #[inline]
    pub fn edge(&self, i: usize) -> (Point, Point) {
        (self.verts[i], self.verts[(i + 1) % 3])
    }

    /// Local edge index shared with `neighbor`, if adjacent.
    #[inline]
    pub fn edge_to(&self, neighbor: TriangleId) -> Option<usize> {
        self.neighbors.iter().position(|n| *n == Some(neighbor))
    }

    /// `(local edge, neighbor)` pairs in edge order.
    pub fn adjacent(&self) -> impl Iterator<Item = (usize, TriangleId)> + '_ {
        self.neighbors.iter().enumerate().filter_map(|(e, n)| n.map(|n| (e, n)))
    }

    #[inline]
    pub fn contains(&self, p: Point, winding: Winding) -> bool {
        point_in_triangle(p, &self.verts, winding)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub internal_edges: usize,
    pub boundary_edges: usize,
}

/// Triangle adjacency ("dual") graph. Immutable once built.
#[derive(Clone, Debug)]
pub struct MeshGraph {
    vertices: Vec<Point>,
    triangles: Vec<Triangle>,
    winding: Winding,
}

impl MeshGraph {
    /// Builds the graph from a shared vertex pool and a flat index buffer
    /// (three indices per triangle).
    ///
    /// Edges are matched by vertex index. An edge claimed by more than two
    /// triangles, or twice in the same direction, is rejected.
    pub fn build(vertices: Vec<Point>, indices: &[u32], winding: Winding) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndexBuffer(indices.len()));
        }
        if let Some(bad) = vertices.iter().position(|v| !(v[0].is_finite() && v[1].is_finite())) {
            return Err(MeshError::NonFiniteVertex(bad as u32));
        }

        let count = indices.len() / 3;
        let mut triangles: Vec<Triangle> = Vec::with_capacity(count);
        for (t, chunk) in indices.chunks_exact(3).enumerate() {
            let t = t as TriangleId;
            let mut ids = [chunk[0], chunk[1], chunk[2]];
            for &index in &ids {
                if index as usize >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange { triangle: t, index, vertex_count: vertices.len() });
                }
            }
            if ids[0] == ids[1] || ids[0] == ids[2] {
                return Err(MeshError::RepeatedVertex { triangle: t, index: ids[0] });
            }
            if ids[1] == ids[2] {
                return Err(MeshError::RepeatedVertex { triangle: t, index: ids[1] });
            }

            let mut verts = ids.map(|i| vertices[i as usize]);
            if orient(verts[0], verts[1], verts[2], winding) < 0.0 {
                ids.reverse();
                verts.reverse();
            }
            triangles.push(Triangle { verts, indices: ids, centroid: centroid(&verts), neighbors: [None; 3] });
        }

        link_neighbors(&mut triangles)?;

        let graph = Self { vertices, triangles, winding };
        let stats = graph.stats();
        debug!(
            vertices = stats.vertices,
            triangles = stats.triangles,
            internal_edges = stats.internal_edges,
            boundary_edges = stats.boundary_edges,
            "built mesh graph"
        );
        Ok(graph)
    }

    /// Builds from independently indexed triangles by welding vertices that
    /// agree up to `options.weld_quantum`.
    pub fn from_soup(triangles: &[[Point; 3]], options: &NavOptions) -> Result<Self, MeshError> {
        let (vertices, indices) = weld(triangles, options.weld_quantum)?;
        Self::build(vertices, &indices, options.winding)
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id as usize)
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] { &self.triangles }

    #[inline]
    pub fn vertices(&self) -> &[Point] { &self.vertices }

    #[inline]
    pub fn winding(&self) -> Winding { self.winding }

    #[inline]
    pub fn len(&self) -> usize { self.triangles.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.triangles.is_empty() }

    pub fn stats(&self) -> MeshStats {
        let linked: usize = self.triangles.iter().map(|t| t.neighbors.iter().flatten().count()).sum();
        MeshStats {
            vertices: self.vertices.len(),
            triangles: self.triangles.len(),
            internal_edges: linked / 2,
            boundary_edges: self.triangles.len() * 3 - linked,
        }
    }
}

fn link_neighbors(triangles: &mut [Triangle]) -> Result<(), MeshError> {
    // Directed edges still waiting for their reverse, and undirected edges
    // already paired.
    let mut open: FxHashMap<(u32, u32), (TriangleId, usize)> = FxHashMap::default();
    let mut paired: FxHashSet<(u32, u32)> = FxHashSet::default();

    for t in 0..triangles.len() {
        for e in 0..3 {
            let a = triangles[t].indices[e];
            let b = triangles[t].indices[(e + 1) % 3];
            let tid = t as TriangleId;
            let non_manifold = MeshError::NonManifoldEdge { triangle: tid, a, b };

            if paired.contains(&(a.min(b), a.max(b))) {
                return Err(non_manifold);
            }
            if let Some((other, other_edge)) = open.remove(&(b, a)) {
                triangles[t].neighbors[e] = Some(other);
                triangles[other as usize].neighbors[other_edge] = Some(tid);
                paired.insert((a.min(b), a.max(b)));
                continue;
            }
            if open.insert((a, b), (tid, e)).is_some() {
                return Err(non_manifold);
            }
        }
    }
    Ok(())
}
