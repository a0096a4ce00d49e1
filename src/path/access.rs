//! Directed step table derived from a level's edges.

use crate::graph::{LevelGraph, PointId};

/// Square boolean table: `allows(from, to)` is true when some edge lets a
/// walker step from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AccessMatrix {
    pub fn from_graph(graph: &LevelGraph) -> Self {
        let size = graph.len();
        let mut cells = vec![false; size * size];
        for edge in graph.edges() {
            if edge.allows(edge.a, edge.b) {
                cells[edge.a * size + edge.b] = true;
            }
            if edge.allows(edge.b, edge.a) {
                cells[edge.b * size + edge.a] = true;
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Out-of-range indices are never allowed.
    pub fn allows(&self, from: PointId, to: PointId) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn directions_map_to_one_or_both_cells() {
        let mut graph = LevelGraph::new();
        for _ in 0..4 {
            graph.add_point(0, 0);
        }
        graph.add_edge(0, 1).unwrap();
        graph.add_directed_edge(1, 2, Direction::AToB).unwrap();
        graph.add_directed_edge(2, 3, Direction::BToA).unwrap();

        let access = AccessMatrix::from_graph(&graph);
        assert_eq!(access.size(), 4);
        assert!(access.allows(0, 1) && access.allows(1, 0));
        assert!(access.allows(1, 2) && !access.allows(2, 1));
        assert!(access.allows(3, 2) && !access.allows(2, 3));
        assert!(!access.allows(0, 3));
        assert!(!access.allows(0, 9));
    }
}
