use super::PointId;
use thiserror::Error;

/// Error type for level graph editing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when a point index does not exist in the graph.
    #[error("Point {index} does not exist (graph has {len} points)")]
    PointOutOfRange { index: PointId, len: usize },

    /// Error when an edge index does not exist in the graph.
    #[error("Edge {index} does not exist (graph has {len} edges)")]
    EdgeOutOfRange { index: usize, len: usize },

    /// Error when an edge would connect a point to itself.
    #[error("Cannot connect point {0} to itself")]
    SelfLoop(PointId),

    /// Error when the unordered endpoint pair is already connected.
    #[error("Points {a} and {b} are already connected by edge {existing}")]
    DuplicateEdge {
        a: PointId,
        b: PointId,
        existing: usize,
    },
}
