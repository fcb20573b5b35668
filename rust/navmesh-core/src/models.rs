use serde::{Deserialize, Serialize};

pub type Point = [f64; 2];
pub type TriangleId = u32;

/// One end of a query: either a known triangle or a position to locate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Triangle(TriangleId),
    Position(Point),
}

impl From<Point> for Endpoint {
    fn from(p: Point) -> Self { Endpoint::Position(p) }
}

impl From<TriangleId> for Endpoint {
    fn from(id: TriangleId) -> Self { Endpoint::Triangle(id) }
}

/// Shared edge between two consecutive triangles of a path.
///
/// Taken in the canonical winding of the triangle the path leaves: the edge
/// runs `left -> right` there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub left: Point,
    pub right: Point,
}

impl Portal {
    pub fn new(left: Point, right: Point) -> Self { Self { left, right } }

    /// Zero-width portal pinned to a single point.
    pub fn point(p: Point) -> Self { Self { left: p, right: p } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    StartNotFound,
    GoalNotFound,
    Unreachable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub status: PathStatus,
    pub triangles: Vec<TriangleId>,
    pub portals: Vec<Portal>,
    pub waypoints: Vec<Point>,
    /// Summed centroid-to-centroid cost of `triangles`.
    pub cost: f64,
    /// Length of the `waypoints` polyline.
    pub length: f64,
    pub expanded: u64,
}

impl PathResult {
    pub fn not_found(status: PathStatus, expanded: u64) -> Self {
        Self { status, triangles: vec![], portals: vec![], waypoints: vec![], cost: 0.0, length: 0.0, expanded }
    }

    pub fn is_found(&self) -> bool { self.status == PathStatus::Found }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn endpoint_serializes_tagged() {
        let v = serde_json::to_value(Endpoint::Position([1.0, 2.0])).unwrap();
        assert_eq!(v, json!({ "position": [1.0, 2.0] }));
        let v = serde_json::to_value(Endpoint::Triangle(7)).unwrap();
        assert_eq!(v, json!({ "triangle": 7 }));
    }

    #[test]
    fn not_found_result_is_empty() {
        let r = PathResult::not_found(PathStatus::GoalNotFound, 0);
        assert!(!r.is_found());
        assert!(r.triangles.is_empty() && r.portals.is_empty() && r.waypoints.is_empty());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["status"], Value::String("goal_not_found".into()));
    }

    #[test]
    fn path_result_round_trip() {
        let pr = PathResult {
            status: PathStatus::Found,
            triangles: vec![0, 1],
            portals: vec![Portal::new([2.0, 1.0], [0.0, 0.0])],
            waypoints: vec![[1.5, 0.25], [0.5, 0.75]],
            cost: 0.75,
            length: 1.125,
            expanded: 2,
        };
        let s = serde_json::to_string(&pr).unwrap();
        let de: PathResult = serde_json::from_str(&s).unwrap();
        assert_eq!(pr, de);
    }
}
