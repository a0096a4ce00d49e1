// error module
mod error;
// level graph module
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::{Direction, Edge, LevelGraph, Point, PointId};
