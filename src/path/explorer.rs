use super::access::AccessMatrix;
use super::error::{CheckError, MoveError};
use super::validator::{validate, Preconditions};
use crate::graph::{LevelGraph, PointId};

/// Mutable state shared by the walk search and the play session.
///
/// `remaining` is the only field that changes while walking; every decrement
/// is paired with an increment when the step is taken back.
#[derive(Clone, Debug)]
pub(super) struct WalkState {
    pub(super) remaining: Vec<u8>,
    pub(super) access: AccessMatrix,
    pub(super) energy_require: Vec<i64>,
    pub(super) end: Option<PointId>,
}

impl WalkState {
    pub(super) fn new(graph: &LevelGraph, end: Option<PointId>) -> Self {
        Self {
            remaining: graph.points().iter().map(|p| p.quota()).collect(),
            access: AccessMatrix::from_graph(graph),
            energy_require: graph.points().iter().map(|p| i64::from(p.after)).collect(),
            end,
        }
    }

    /// Rules for the first point of a walk.
    pub(super) fn check_first(
        &self,
        preconditions: &Preconditions,
        index: PointId,
    ) -> Result<(), MoveError> {
        if index >= self.remaining.len() {
            return Err(MoveError::UnknownPoint(index));
        }
        if !preconditions.may_begin_at(index) {
            return Err(MoveError::NotAStart(index));
        }
        let delta = self.energy_require[index];
        if delta < 0 {
            return Err(MoveError::EnergyExhausted {
                point: index,
                energy: 0,
                delta,
            });
        }
        Ok(())
    }

    /// Rules for stepping from `last` onto `index` with `depth` visits still
    /// to place, counting this one.
    pub(super) fn check_step(
        &self,
        last: PointId,
        index: PointId,
        energy: i64,
        depth: usize,
    ) -> Result<(), MoveError> {
        if index >= self.remaining.len() {
            return Err(MoveError::UnknownPoint(index));
        }
        if !self.access.allows(last, index) {
            return Err(MoveError::NoEdge {
                from: last,
                to: index,
            });
        }
        let remaining = self.remaining[index];
        if remaining == 0 {
            return Err(MoveError::QuotaExhausted(index));
        }
        // The end point may only be used up by the final step. A twice end
        // point can take its first visit mid-walk.
        if self.end == Some(index) && depth != 1 && remaining < 2 {
            return Err(MoveError::EndTooEarly(index));
        }
        let delta = self.energy_require[index];
        if energy + delta < 0 {
            return Err(MoveError::EnergyExhausted {
                point: index,
                energy,
                delta,
            });
        }
        Ok(())
    }

    /// Counts the complete walks that extend the current prefix.
    fn search(&mut self, energy: i64, last: PointId, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut count = 0;
        for index in 0..self.remaining.len() {
            if self.check_step(last, index, energy, depth).is_err() {
                continue;
            }
            self.remaining[index] -= 1;
            count += self.search(energy + self.energy_require[index], index, depth - 1);
            self.remaining[index] += 1;
        }
        count
    }
}

/// Validates the level, then counts its solutions.
///
/// # Errors
/// Returns the `CheckError` produced by `validate`; a level with no solution
/// is `Ok(0)`, not an error.
pub fn count_walks(graph: &LevelGraph) -> Result<u64, CheckError> {
    let preconditions = validate(graph)?;
    Ok(count_valid_walks(graph, &preconditions))
}

/// Counts every walk that occupies each point exactly its quota of times,
/// respects edge directions and the start/end markers, and never lets the
/// running energy drop below zero.
///
/// `preconditions` must come from `validate` on the same graph. An empty
/// graph has exactly one (empty) walk.
pub fn count_valid_walks(graph: &LevelGraph, preconditions: &Preconditions) -> u64 {
    if graph.is_empty() {
        return 1;
    }

    let mut state = WalkState::new(graph, preconditions.end);
    let mut count = 0;
    for index in 0..graph.len() {
        if state.check_first(preconditions, index).is_err() {
            continue;
        }
        state.remaining[index] -= 1;
        count += state.search(
            state.energy_require[index],
            index,
            preconditions.total_depth - 1,
        );
        state.remaining[index] += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    fn with_points(n: usize) -> LevelGraph {
        let mut graph = LevelGraph::new();
        for i in 0..n {
            graph.add_point(i as i32, 0);
        }
        graph
    }

    fn connect(graph: &mut LevelGraph, pairs: &[(PointId, PointId)]) {
        for &(a, b) in pairs {
            graph.add_edge(a, b).unwrap();
        }
    }

    #[test]
    fn single_edge_start_to_end() {
        let mut graph = with_points(2);
        connect(&mut graph, &[(0, 1)]);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().is_end = true;
        assert_eq!(count_walks(&graph), Ok(1));
    }

    #[test]
    fn triangle_with_start_and_end_has_one_walk() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2), (0, 2)]);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().is_end = true;
        // 0 -> 1 -> 2 would finish the end point early; only 0 -> 2 -> 1 remains.
        assert_eq!(count_walks(&graph), Ok(1));
    }

    #[test]
    fn disconnected_level_is_refused() {
        let graph = with_points(2);
        assert_eq!(count_walks(&graph), Err(CheckError::Disconnected));
    }

    #[test]
    fn start_and_end_on_one_point_is_refused() {
        let mut graph = with_points(1);
        let point = graph.point_mut(0).unwrap();
        point.is_start = true;
        point.is_end = true;
        assert_eq!(
            count_walks(&graph).map_err(|e| e.code()),
            Err("both-start-and-end")
        );
    }

    #[test]
    fn empty_graph_has_the_empty_walk() {
        assert_eq!(count_walks(&LevelGraph::new()), Ok(1));
    }

    #[test]
    fn single_point_has_one_walk() {
        assert_eq!(count_walks(&with_points(1)), Ok(1));
    }

    #[test]
    fn unmarked_four_cycle_counts_both_directions_from_every_point() {
        let mut graph = with_points(4);
        connect(&mut graph, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(count_walks(&graph), Ok(8));
    }

    #[test]
    fn directed_edges_restrict_the_walk() {
        let mut graph = with_points(3);
        graph.add_directed_edge(0, 1, Direction::AToB).unwrap();
        graph.add_directed_edge(2, 1, Direction::BToA).unwrap();
        assert_eq!(count_walks(&graph), Ok(1));
    }

    #[test]
    fn end_without_start_excludes_end_as_first_point() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2)]);
        graph.point_mut(2).unwrap().is_end = true;
        // 2 -> 1 -> 0 is excluded, 0 -> 1 -> 2 remains.
        assert_eq!(count_walks(&graph), Ok(1));
    }

    #[test]
    fn no_point_can_begin_yields_zero() {
        let mut graph = with_points(2);
        connect(&mut graph, &[(0, 1)]);
        graph.point_mut(0).unwrap().after = -1;
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().after = 5;
        assert_eq!(count_walks(&graph), Ok(0));
    }

    #[test]
    fn energy_dip_midway_yields_zero() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2)]);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().after = -100;
        graph.point_mut(2).unwrap().after = 120;
        // The total is positive, so validation passes, but 0 -> 1 dips below zero.
        assert_eq!(count_walks(&graph), Ok(0));
    }

    #[test]
    fn energy_gained_early_pays_for_later_costs() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2)]);
        graph.point_mut(0).unwrap().after = 1;
        graph.point_mut(2).unwrap().after = -1;
        // 0 -> 1 -> 2 ends at zero; 2 -> 1 -> 0 starts below zero.
        assert_eq!(count_walks(&graph), Ok(1));
    }

    #[test]
    fn twice_point_is_occupied_twice() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2), (0, 2)]);
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().is_twice = true;
        // Length four: only 0 -> 1 -> 2 -> 1 uses point 1 twice.
        assert_eq!(count_walks(&graph), Ok(1));
    }

    // The end guard lets a twice end point take its first visit at any depth
    // and its second only on the final step. Worth confirming against the
    // level editor's own answers for hand-made levels.
    #[test]
    fn twice_end_point_first_visit_may_be_mid_walk() {
        let mut graph = with_points(3);
        connect(&mut graph, &[(0, 1), (1, 2), (0, 2)]);
        graph.point_mut(0).unwrap().is_start = true;
        let end = graph.point_mut(1).unwrap();
        end.is_end = true;
        end.is_twice = true;
        // 0 -> 1 -> 2 -> 1 is the only walk; 0 -> 2 -> 1 strands point 1.
        assert_eq!(count_walks(&graph), Ok(1));

        let pre = validate(&graph).unwrap();
        let mut state = WalkState::new(&graph, pre.end);
        state.remaining[0] -= 1;
        assert_eq!(state.check_step(0, 1, 0, 3), Ok(()));
        state.remaining[1] -= 1;
        assert_eq!(
            state.check_step(2, 1, 0, 2),
            Err(MoveError::EndTooEarly(1))
        );
        assert_eq!(state.check_step(2, 1, 0, 1), Ok(()));
    }

    #[test]
    fn count_is_invariant_under_point_permutation() {
        let pairs = [(0, 1), (1, 2), (2, 3), (0, 3), (0, 2)];
        let build = |perm: &[PointId]| {
            let mut graph = with_points(4);
            for &(a, b) in &pairs {
                graph.add_edge(perm[a], perm[b]).unwrap();
            }
            graph.point_mut(perm[1]).unwrap().is_twice = true;
            graph.point_mut(perm[3]).unwrap().is_end = true;
            graph.point_mut(perm[2]).unwrap().after = 2;
            graph.point_mut(perm[0]).unwrap().after = -1;
            graph
        };

        let base = count_walks(&build(&[0, 1, 2, 3])).unwrap();
        assert!(base > 0);
        for perm in [[2, 0, 3, 1], [3, 2, 1, 0], [1, 3, 0, 2]] {
            assert_eq!(count_walks(&build(&perm)), Ok(base));
        }
    }

    #[test]
    fn count_is_invariant_under_edge_order() {
        let pairs = [(0, 1), (1, 2), (2, 3), (0, 3), (1, 3)];
        let mut forward = with_points(4);
        let mut reversed = with_points(4);
        connect(&mut forward, &pairs);
        let flipped: Vec<_> = pairs.iter().rev().map(|&(a, b)| (b, a)).collect();
        connect(&mut reversed, &flipped);
        assert_eq!(count_walks(&forward), count_walks(&reversed));
    }
}
