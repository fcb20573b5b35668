use tracing::{debug, error};

use crate::engine::{AStarSearch, SearchContext};
use crate::error::{MeshError, NavError};
use crate::funnel::FunnelSmoother;
use crate::geometry::path_length;
use crate::graph::{MeshGraph, PointLocator};
use crate::models::{Endpoint, PathResult, PathStatus, Point, Portal, TriangleId};
use crate::options::NavOptions;
use crate::portals;

/// A built navmesh plus the options its queries run with.
///
/// Read-only after construction; share it freely between threads and give
/// each thread its own `SearchContext` if it wants to reuse scratch memory.
#[derive(Clone, Debug)]
pub struct Navmesh {
    graph: MeshGraph,
    options: NavOptions,
}

impl Navmesh {
    pub fn new(vertices: Vec<Point>, indices: &[u32], options: NavOptions) -> Result<Self, MeshError> {
        let graph = MeshGraph::build(vertices, indices, options.winding)?;
        Ok(Self { graph, options })
    }

    pub fn from_soup(triangles: &[[Point; 3]], options: NavOptions) -> Result<Self, MeshError> {
        let graph = MeshGraph::from_soup(triangles, &options)?;
        Ok(Self { graph, options })
    }

    pub fn graph(&self) -> &MeshGraph { &self.graph }

    pub fn options(&self) -> &NavOptions { &self.options }

    pub fn locate(&self, endpoint: Endpoint) -> Option<TriangleId> {
        PointLocator::new(&self.graph).locate(endpoint)
    }

    pub fn search(&self, start: Endpoint, goal: Endpoint) -> Vec<TriangleId> {
        AStarSearch::new(&self.graph).search(start, goal)
    }

    pub fn portals(&self, path: &[TriangleId]) -> Result<Vec<Portal>, NavError> {
        portals::extract(&self.graph, path)
    }

    pub fn smooth(&self, portals: &[Portal], start: Point, end: Point) -> Vec<Point> {
        FunnelSmoother::from_options(&self.options).smooth(portals, start, end)
    }

    /// Runs locate, search, portal extraction and smoothing for one query.
    pub fn find_path(&self, start: Point, end: Point) -> PathResult {
        let mut ctx = SearchContext::new(self.graph.len());
        self.find_path_with(&mut ctx, start, end)
    }

    pub fn find_path_with(&self, ctx: &mut SearchContext, start: Point, end: Point) -> PathResult {
        let locator = PointLocator::new(&self.graph);
        let Some(start_tri) = locator.locate_point(start) else {
            debug!(x = start[0], y = start[1], "start is off the mesh");
            return PathResult::not_found(PathStatus::StartNotFound, 0);
        };
        let Some(goal_tri) = locator.locate_point(end) else {
            debug!(x = end[0], y = end[1], "goal is off the mesh");
            return PathResult::not_found(PathStatus::GoalNotFound, 0);
        };

        let found = AStarSearch::new(&self.graph).search_ids(start_tri, goal_tri, ctx);
        if !found.found {
            return PathResult::not_found(PathStatus::Unreachable, found.expanded);
        }

        let portals = match self.portals(&found.path) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "search returned a path with non-adjacent triangles");
                return PathResult::not_found(PathStatus::Unreachable, found.expanded);
            }
        };
        let waypoints = self.smooth(&portals, start, end);
        let length = path_length(&waypoints);
        debug!(
            start_tri,
            goal_tri,
            triangles = found.path.len(),
            waypoints = waypoints.len(),
            cost = found.cost,
            length,
            "find_path done"
        );

        PathResult {
            status: PathStatus::Found,
            triangles: found.path,
            portals,
            waypoints,
            cost: found.cost,
            length,
            expanded: found.expanded,
        }
    }
}
