use crate::graph::PointId;
use thiserror::Error;

// Reasons a level is rejected before the walk search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A single point is marked as both start and end.
    #[error("Point {index} cannot be both the start and the end")]
    BothStartAndEnd { index: PointId },

    /// More than one point is marked as start.
    #[error("Multiple start points: {first} and {second}")]
    MultipleStarts { first: PointId, second: PointId },

    /// More than one point is marked as end.
    #[error("Multiple end points: {first} and {second}")]
    MultipleEnds { first: PointId, second: PointId },

    /// The graph, ignoring edge directions, has more than one component.
    #[error("The level is not connected (ignoring edge directions)")]
    Disconnected,

    /// The energy of a full walk would end below zero.
    #[error("Total energy over a full walk is negative: {total}")]
    NegativeTotalEnergy { total: i64 },
}

impl CheckError {
    /// Stable reason code, suitable for scripts and logs.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::BothStartAndEnd { .. } => "both-start-and-end",
            CheckError::MultipleStarts { .. } => "multiple-starts",
            CheckError::MultipleEnds { .. } => "multiple-ends",
            CheckError::Disconnected => "disconnected",
            CheckError::NegativeTotalEnergy { .. } => "negative-total-energy",
        }
    }
}

// Error type for a single move inside a play session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Point {0} does not exist")]
    UnknownPoint(PointId),

    #[error("The route is already complete")]
    AlreadyFinished,

    /// The first occupation is restricted by the start/end markers.
    #[error("Point {0} cannot begin the route")]
    NotAStart(PointId),

    #[error("No edge allows a step from {from} to {to}")]
    NoEdge { from: PointId, to: PointId },

    #[error("Point {0} has no visits left")]
    QuotaExhausted(PointId),

    /// The end point would be used up before the final step.
    #[error("End point {0} can only be finished on the last step")]
    EndTooEarly(PointId),

    #[error("Energy {energy} cannot pay for point {point} (delta {delta})")]
    EnergyExhausted {
        point: PointId,
        energy: i64,
        delta: i64,
    },
}

// Error type for replaying a full route against a level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Level rejected: {0}")]
    Check(#[from] CheckError),

    #[error("Move {position} rejected: {source}")]
    Move {
        position: usize,
        #[source]
        source: MoveError,
    },
}
