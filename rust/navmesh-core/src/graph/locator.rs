use crate::graph::mesh::MeshGraph;
use crate::models::{Endpoint, Point, TriangleId};

/// Resolves query endpoints to triangles.
///
/// Positions are found with a linear scan in triangle id order, so a point
/// lying on an edge shared by two triangles belongs to the lower id. O(T) per
/// lookup; fine for room-sized meshes, not for large worlds.
#[derive(Clone, Copy)]
pub struct PointLocator<'a> {
    graph: &'a MeshGraph,
}

impl<'a> PointLocator<'a> {
    pub fn new(graph: &'a MeshGraph) -> Self { Self { graph } }

    pub fn locate(&self, endpoint: Endpoint) -> Option<TriangleId> {
        match endpoint {
            Endpoint::Triangle(id) => self.graph.triangle(id).map(|_| id),
            Endpoint::Position(p) => self.locate_point(p),
        }
    }

    pub fn locate_point(&self, p: Point) -> Option<TriangleId> {
        // Non-finite input never lies on the mesh.
        if !(p[0].is_finite() && p[1].is_finite()) {
            return None;
        }
        let winding = self.graph.winding();
        self.graph
            .triangles()
            .iter()
            .position(|t| t.contains(p, winding))
            .map(|i| i as TriangleId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Winding;

    fn rect(winding: Winding) -> MeshGraph {
        MeshGraph::build(
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]],
            &[0, 1, 2, 0, 2, 3],
            winding,
        )
        .unwrap()
    }

    #[test]
    fn finds_containing_triangle() {
        for w in [Winding::YUp, Winding::YDown] {
            let g = rect(w);
            let loc = PointLocator::new(&g);
            assert_eq!(loc.locate_point([1.5, 0.25]), Some(0));
            assert_eq!(loc.locate_point([0.5, 0.75]), Some(1));
            assert_eq!(loc.locate_point([3.0, 0.5]), None);
        }
    }

    #[test]
    fn shared_edge_goes_to_lower_id() {
        let g = rect(Winding::YUp);
        let loc = PointLocator::new(&g);
        // Midpoint of the diagonal.
        assert_eq!(loc.locate_point([1.0, 0.5]), Some(0));
        assert_eq!(loc.locate_point([0.0, 0.0]), Some(0));
    }

    #[test]
    fn non_finite_positions_are_nowhere() {
        let g = rect(Winding::YUp);
        let loc = PointLocator::new(&g);
        assert_eq!(loc.locate_point([f64::NAN, f64::NAN]), None);
        assert_eq!(loc.locate_point([f64::NAN, 0.5]), None);
        assert_eq!(loc.locate(Endpoint::Position([0.5, f64::INFINITY])), None);
    }

    #[test]
    fn ids_pass_through_when_valid() {
        let g = rect(Winding::YUp);
        let loc = PointLocator::new(&g);
        assert_eq!(loc.locate(Endpoint::Triangle(1)), Some(1));
        assert_eq!(loc.locate(Endpoint::Triangle(2)), None);
        assert_eq!(loc.locate(Endpoint::Position([0.1, 0.9])), Some(1));
    }
}
