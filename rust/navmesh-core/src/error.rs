use thiserror::Error;

use crate::models::TriangleId;

/// Reasons a triangulation is refused at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("index buffer length {0} is not a multiple of 3")]
    RaggedIndexBuffer(usize),
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange { triangle: TriangleId, index: u32, vertex_count: usize },
    #[error("triangle {triangle} repeats vertex {index}")]
    RepeatedVertex { triangle: TriangleId, index: u32 },
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(u32),
    #[error("edge ({a}, {b}) of triangle {triangle} is shared by more than two triangles")]
    NonManifoldEdge { triangle: TriangleId, a: u32, b: u32 },
    #[error("weld quantum must be positive and finite, got {0}")]
    InvalidQuantum(f64),
    #[error("vertex {vertex} is too far from the origin to weld at quantum {quantum}")]
    WeldOutOfRange { vertex: u32, quantum: f64 },
}

/// Caller contract violations inside the query pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("triangle {0} does not exist")]
    UnknownTriangle(TriangleId),
    #[error("triangles {from} and {to} are not adjacent")]
    NotAdjacent { from: TriangleId, to: TriangleId },
}
