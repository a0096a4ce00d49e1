//! Checks that run before the exhaustive walk search.
//!
//! Every rejection carries a specific reason so the caller can tell the level
//! author what to fix. A level that passes may still have zero solutions.

use super::connectivity::is_connected;
use super::error::CheckError;
use crate::graph::{LevelGraph, PointId};

/// Facts about a level that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preconditions {
    /// Length of a complete walk: the sum of all visit quotas.
    pub total_depth: usize,
    pub start: Option<PointId>,
    pub end: Option<PointId>,
    /// Energy left after a complete walk, `Σ quota × after`.
    pub total_energy: i64,
}

impl Preconditions {
    /// Whether `index` may be the first point of a walk, ignoring energy.
    pub fn may_begin_at(&self, index: PointId) -> bool {
        match (self.start, self.end) {
            (Some(start), _) => index == start,
            (None, Some(end)) => index != end,
            (None, None) => true,
        }
    }
}

/// Validates the start/end markers, connectivity and total energy of a level.
///
/// # Errors
/// - `CheckError::Disconnected` if the undirected graph has several components.
/// - `CheckError::BothStartAndEnd`, `MultipleStarts` or `MultipleEnds` at the
///   first offending point, scanning in index order.
/// - `CheckError::NegativeTotalEnergy` if a full walk would end below zero.
pub fn validate(graph: &LevelGraph) -> Result<Preconditions, CheckError> {
    if !is_connected(graph) {
        return Err(CheckError::Disconnected);
    }

    let mut start: Option<PointId> = None;
    let mut end: Option<PointId> = None;
    let mut total_depth = 0usize;
    let mut total_energy = 0i64;

    for (index, point) in graph.points().iter().enumerate() {
        if point.is_start && point.is_end {
            return Err(CheckError::BothStartAndEnd { index });
        }
        if point.is_start {
            if let Some(first) = start {
                return Err(CheckError::MultipleStarts {
                    first,
                    second: index,
                });
            }
            start = Some(index);
        }
        if point.is_end {
            if let Some(first) = end {
                return Err(CheckError::MultipleEnds {
                    first,
                    second: index,
                });
            }
            end = Some(index);
        }
        total_depth += point.quota() as usize;
        total_energy += i64::from(point.quota()) * i64::from(point.after);
    }

    // Necessary but not sufficient: a walk can still dip below zero midway.
    if total_energy < 0 {
        return Err(CheckError::NegativeTotalEnergy {
            total: total_energy,
        });
    }

    Ok(Preconditions {
        total_depth,
        start,
        end,
        total_energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> LevelGraph {
        let mut graph = LevelGraph::new();
        for i in 0..n {
            graph.add_point(i as i32, 0);
            if i > 0 {
                graph.add_edge(i - 1, i).unwrap();
            }
        }
        graph
    }

    #[test]
    fn collects_start_end_and_depth() {
        let mut graph = path_graph(3);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(2).unwrap().is_end = true;
        graph.point_mut(1).unwrap().is_twice = true;
        graph.point_mut(1).unwrap().after = 3;

        let pre = validate(&graph).unwrap();
        assert_eq!(pre.start, Some(0));
        assert_eq!(pre.end, Some(2));
        assert_eq!(pre.total_depth, 4);
        assert_eq!(pre.total_energy, 6);
    }

    #[test]
    fn rejects_point_that_is_both_start_and_end() {
        let mut graph = path_graph(2);
        let point = graph.point_mut(1).unwrap();
        point.is_start = true;
        point.is_end = true;
        let err = validate(&graph).unwrap_err();
        assert_eq!(err, CheckError::BothStartAndEnd { index: 1 });
        assert_eq!(err.code(), "both-start-and-end");
    }

    #[test]
    fn rejects_multiple_starts_and_ends() {
        let mut graph = path_graph(3);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(2).unwrap().is_start = true;
        assert_eq!(
            validate(&graph),
            Err(CheckError::MultipleStarts { first: 0, second: 2 })
        );

        let mut graph = path_graph(3);
        graph.point_mut(1).unwrap().is_end = true;
        graph.point_mut(2).unwrap().is_end = true;
        assert_eq!(
            validate(&graph).map_err(|e| e.code()),
            Err("multiple-ends")
        );
    }

    #[test]
    fn disconnected_is_reported_before_marker_problems() {
        let mut graph = LevelGraph::new();
        graph.add_point(0, 0);
        graph.add_point(1, 0);
        let point = graph.point_mut(0).unwrap();
        point.is_start = true;
        point.is_end = true;
        assert_eq!(validate(&graph), Err(CheckError::Disconnected));
    }

    #[test]
    fn twice_points_count_their_energy_twice() {
        let mut graph = path_graph(2);
        graph.point_mut(0).unwrap().after = 3;
        graph.point_mut(1).unwrap().after = -2;
        graph.point_mut(1).unwrap().is_twice = true;
        // 3 + 2 * (-2) = -1
        assert_eq!(
            validate(&graph),
            Err(CheckError::NegativeTotalEnergy { total: -1 })
        );
    }

    #[test]
    fn may_begin_at_follows_markers() {
        let pre = Preconditions {
            total_depth: 3,
            start: None,
            end: Some(1),
            total_energy: 0,
        };
        assert!(pre.may_begin_at(0));
        assert!(!pre.may_begin_at(1));

        let pre = Preconditions {
            start: Some(2),
            ..pre
        };
        assert!(!pre.may_begin_at(0));
        assert!(pre.may_begin_at(2));
    }
}
