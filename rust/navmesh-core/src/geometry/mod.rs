pub mod predicates;
pub mod weld;

pub use predicates::{centroid, distance, distance_sq, ensure_ccw, orient, path_length, point_in_triangle, signed_area};
pub use weld::weld;
