use itertools::Itertools;

use crate::geometry::distance;
use crate::graph::MeshGraph;
use crate::models::TriangleId;

/// Straight-line distance between two triangle centroids.
///
/// Serves as both the step cost between neighbours and the A* estimate
/// towards the goal, so the estimate is consistent with the cost.
#[inline]
pub fn centroid_distance(graph: &MeshGraph, a: TriangleId, b: TriangleId) -> f64 {
    let tris = graph.triangles();
    distance(tris[a as usize].centroid, tris[b as usize].centroid)
}

/// Summed centroid-to-centroid cost of a triangle path. Ids must be valid.
pub fn route_cost(graph: &MeshGraph, path: &[TriangleId]) -> f64 {
    path.iter().tuple_windows().map(|(&a, &b)| centroid_distance(graph, a, b)).sum()
}
