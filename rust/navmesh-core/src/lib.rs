pub mod error;
pub mod options;
pub mod models;
pub mod geometry;
pub mod graph;
pub mod engine;
pub mod portals;
pub mod funnel;
pub mod navmesh;

pub use error::{MeshError, NavError};
pub use options::{NavOptions, Winding};
pub use models::{Endpoint, PathResult, PathStatus, Point, Portal, TriangleId};
pub use graph::{MeshGraph, MeshStats, PointLocator, Triangle};
pub use engine::{AStarSearch, SearchContext, SearchResult};
pub use funnel::FunnelSmoother;
pub use navmesh::Navmesh;

pub fn version() -> &'static str { env!("CARGO_PKG_VERSION") }
