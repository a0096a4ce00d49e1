//! Step-by-step play of a level, as a player would enter a route.
//!
//! A session applies exactly the rules the walk search counts with, so any
//! walk included in `count_walks` can be replayed here to `Finished`.

use super::error::{CheckError, MoveError, ReplayError};
use super::explorer::WalkState;
use super::validator::{validate, Preconditions};
use crate::graph::{LevelGraph, PointId};

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The point was occupied and more visits are still owed.
    Moved,
    /// The point was occupied and the route now covers the whole level.
    Finished,
}

/// A partially entered route over one level.
#[derive(Clone, Debug)]
pub struct PlaySession {
    state: WalkState,
    preconditions: Preconditions,
    route: Vec<PointId>,
    energy: i64,
    /// Visits still to place.
    depth: usize,
}

impl PlaySession {
    /// Starts a session. A designated start point is occupied immediately.
    ///
    /// # Errors
    /// Returns the validation error if the level is malformed.
    pub fn new(graph: &LevelGraph) -> Result<Self, CheckError> {
        let preconditions = validate(graph)?;
        let mut session = Self {
            state: WalkState::new(graph, preconditions.end),
            depth: preconditions.total_depth,
            preconditions,
            route: Vec::new(),
            energy: 0,
        };
        session.place_start();
        Ok(session)
    }

    /// Tries to occupy `index` next.
    pub fn step(&mut self, index: PointId) -> Result<StepOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::AlreadyFinished);
        }
        match self.route.last() {
            None => self.state.check_first(&self.preconditions, index)?,
            Some(&last) => self
                .state
                .check_step(last, index, self.energy, self.depth)?,
        }
        self.occupy(index);

        if self.is_finished() {
            Ok(StepOutcome::Finished)
        } else {
            Ok(StepOutcome::Moved)
        }
    }

    /// Takes back the last occupation and returns the point it was on.
    ///
    /// When the route becomes empty the designated start, if any, is placed
    /// again, so the start itself cannot be taken back.
    pub fn undo(&mut self) -> Option<PointId> {
        if self.preconditions.start.is_some() && self.route.len() <= 1 {
            return None;
        }
        let index = self.route.pop()?;
        self.state.remaining[index] += 1;
        self.energy -= self.state.energy_require[index];
        self.depth += 1;
        Some(index)
    }

    /// Clears the route back to its initial state.
    pub fn reset(&mut self) {
        while let Some(index) = self.route.pop() {
            self.state.remaining[index] += 1;
            self.energy -= self.state.energy_require[index];
            self.depth += 1;
        }
        self.place_start();
    }

    pub fn route(&self) -> &[PointId] {
        &self.route
    }

    pub fn energy(&self) -> i64 {
        self.energy
    }

    pub fn remaining_steps(&self) -> usize {
        self.depth
    }

    pub fn is_finished(&self) -> bool {
        self.depth == 0
    }

    pub fn preconditions(&self) -> &Preconditions {
        &self.preconditions
    }

    fn place_start(&mut self) {
        if let Some(start) = self.preconditions.start {
            // Validation guarantees the start exists; a negative start delta
            // leaves the route empty and every first move rejected by energy.
            if self.state.check_first(&self.preconditions, start).is_ok() {
                self.occupy(start);
            }
        }
    }

    fn occupy(&mut self, index: PointId) {
        self.route.push(index);
        self.state.remaining[index] -= 1;
        self.energy += self.state.energy_require[index];
        self.depth -= 1;
    }
}

/// Replays `route` from a fresh session.
///
/// A leading designated start point may be included or omitted.
///
/// # Errors
/// `ReplayError::Check` if the level is malformed, `ReplayError::Move` with
/// the zero-based position of the first rejected move otherwise.
pub fn replay_route(graph: &LevelGraph, route: &[PointId]) -> Result<PlaySession, ReplayError> {
    let mut session = PlaySession::new(graph)?;
    let moves = match (session.route().first(), route.first()) {
        (Some(start), Some(first)) if start == first => &route[1..],
        _ => route,
    };
    let offset = route.len() - moves.len();

    for (position, &index) in moves.iter().enumerate() {
        session
            .step(index)
            .map_err(|source| ReplayError::Move {
                position: position + offset,
                source,
            })?;
    }
    Ok(session)
}
