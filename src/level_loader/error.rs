use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for level file operations.
/// This error type is used to represent the errors that can occur while
/// reading, decoding, encoding and writing level files.
#[derive(Error, Debug)]
pub enum LevelLoaderError {
    /// Error when reading a file.
    #[error("Failed to read level file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when writing a file.
    #[error("Failed to write level file '{0}': {1}")]
    WriteFile(String, std::io::Error),

    /// Error when the data ends before the declared points and edges.
    #[error("Level data truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Error when bytes remain after the declared points and edges.
    #[error("Level data has {0} unexpected trailing bytes")]
    TrailingBytes(usize),

    /// Error when an edge carries an unknown direction code.
    #[error("Edge {edge} has unknown direction code {code}")]
    InvalidDirection { edge: usize, code: i8 },

    /// Error when an edge endpoint is out of range, repeated, or a self loop.
    #[error("Edge {edge} is invalid: {reason}")]
    InvalidEdge { edge: usize, reason: String },

    /// Error when the graph does not fit the fixed-width format.
    #[error("Level is too large to encode: {0}")]
    TooLarge(String),

    /// Error when a point's energy delta does not fit in one signed byte.
    #[error("Point {point} energy {after} does not fit in a signed byte")]
    EnergyOutOfRange { point: usize, after: i32 },
}
