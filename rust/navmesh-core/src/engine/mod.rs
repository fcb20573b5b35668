pub mod heuristics;
pub mod search;

pub use heuristics::{centroid_distance, route_cost};
pub use search::{AStarSearch, SearchContext, SearchResult};
