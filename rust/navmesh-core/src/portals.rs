use itertools::Itertools;

use crate::error::NavError;
use crate::graph::MeshGraph;
use crate::models::{Portal, TriangleId};

/// Turns a triangle path into the shared edges an agent crosses, one fewer
/// than the path length.
///
/// Each portal is the shared edge exactly as it runs in the first triangle's
/// canonical winding, `left -> right`. Consecutive entries must be adjacent,
/// which any A* path guarantees.
pub fn extract(graph: &MeshGraph, path: &[TriangleId]) -> Result<Vec<Portal>, NavError> {
    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| {
            let tri = graph.triangle(from).ok_or(NavError::UnknownTriangle(from))?;
            let edge = tri.edge_to(to).ok_or(NavError::NotAdjacent { from, to })?;
            let (left, right) = tri.edge(edge);
            Ok(Portal { left, right })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Winding;

    fn rect() -> MeshGraph {
        MeshGraph::build(
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]],
            &[0, 1, 2, 0, 2, 3],
            Winding::YUp,
        )
        .unwrap()
    }

    #[test]
    fn diagonal_portal_in_first_triangle_winding() {
        let g = rect();
        let portals = extract(&g, &[0, 1]).unwrap();
        assert_eq!(portals.len(), 1);
        // T0 is (0,0) (2,0) (2,1); the diagonal is its edge 2, running (2,1) -> (0,0).
        assert_eq!(portals[0], Portal::new([2.0, 1.0], [0.0, 0.0]));
        let t0 = g.triangle(0).unwrap();
        assert_eq!(t0.edge(t0.edge_to(1).unwrap()), (portals[0].left, portals[0].right));

        // Same two points, reversed, in T1's winding.
        let t1 = g.triangle(1).unwrap();
        let (a, b) = t1.edge(t1.edge_to(0).unwrap());
        assert_eq!((a, b), (portals[0].right, portals[0].left));
    }

    #[test]
    fn short_paths_have_no_portals() {
        let g = rect();
        assert!(extract(&g, &[]).unwrap().is_empty());
        assert!(extract(&g, &[1]).unwrap().is_empty());
    }

    #[test]
    fn reports_broken_paths() {
        let g = rect();
        assert_eq!(extract(&g, &[0, 0]), Err(NavError::NotAdjacent { from: 0, to: 0 }));
        assert_eq!(extract(&g, &[5, 0]), Err(NavError::UnknownTriangle(5)));
    }
}
