pub mod locator;
pub mod mesh;

pub use locator::PointLocator;
pub use mesh::{MeshGraph, MeshStats, Triangle};
