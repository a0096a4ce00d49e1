//! Connectivity of a level, ignoring edge directions.

use crate::graph::LevelGraph;

/// Per-point progress of the frontier expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Frontier,
    Settled,
}

/// Returns true if every point is reachable from point 0 when all edges are
/// treated as undirected.
///
/// Graphs with zero or one point are connected.
pub fn is_connected(graph: &LevelGraph) -> bool {
    let point_count = graph.len();
    if point_count <= 1 {
        return true;
    }

    let mut state = vec![VisitState::Unvisited; point_count];
    state[0] = VisitState::Frontier;
    let mut frontier = vec![0];
    let mut reached = 1;

    while reached < point_count {
        let Some(current) = frontier.pop() else {
            break;
        };
        // A point enters the frontier only once, so it is settled only once.
        state[current] = VisitState::Settled;

        for edge in graph.edges() {
            if let Some(next) = edge.other(current) {
                if state[next] == VisitState::Unvisited {
                    state[next] = VisitState::Frontier;
                    frontier.push(next);
                    reached += 1;
                }
            }
        }
    }

    reached == point_count
}
