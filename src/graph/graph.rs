// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// In-memory model of one puzzle level: an ordered list of points and a list of
// edges between them. Point indices are the identity of a point, so removing a
// point shifts every higher index down by one and rewrites edge endpoints to
// match. Edges are stored with `a < b`; the direction tag says which way(s)
// the edge may be walked.
// ──────────────────────────────────────────────────────────────────────────────
use super::error::GraphError;

/// Index of a point inside a `LevelGraph`.
pub type PointId = usize;

/// A single point of a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub is_start: bool,
    pub is_end: bool,
    /// The point must be occupied twice instead of once.
    pub is_twice: bool,
    /// Signed energy delta applied on every visit.
    pub after: i32,
}

impl Point {
    /// Creates a plain point at the given position.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Number of times a complete walk must occupy this point.
    pub fn quota(&self) -> u8 {
        if self.is_twice {
            2
        } else {
            1
        }
    }
}

/// Which way(s) an edge may be walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Traversable both ways.
    #[default]
    None,
    /// Only from `a` to `b`.
    AToB,
    /// Only from `b` to `a`.
    BToA,
}

impl Direction {
    /// Next direction in the editor's toggle order: none, a→b, b→a, none.
    pub fn next(self) -> Self {
        match self {
            Direction::None => Direction::AToB,
            Direction::AToB => Direction::BToA,
            Direction::BToA => Direction::None,
        }
    }

    /// The same direction seen from the other endpoint.
    pub fn reversed(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::AToB => Direction::BToA,
            Direction::BToA => Direction::AToB,
        }
    }
}

/// An edge between two distinct points, normalized so that `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: PointId,
    pub b: PointId,
    pub direction: Direction,
}

impl Edge {
    /// Returns true if the edge touches `point`.
    pub fn touches(&self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    /// The endpoint opposite to `point`, if the edge touches it.
    pub fn other(&self, point: PointId) -> Option<PointId> {
        if self.a == point {
            Some(self.b)
        } else if self.b == point {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns true if a walker standing on `from` may cross to `to`.
    pub fn allows(&self, from: PointId, to: PointId) -> bool {
        if from == self.a && to == self.b {
            self.direction != Direction::BToA
        } else if from == self.b && to == self.a {
            self.direction != Direction::AToB
        } else {
            false
        }
    }
}

/// A puzzle level: ordered points plus edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelGraph {
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl LevelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: PointId) -> Option<&Point> {
        self.points.get(index)
    }

    /// Mutable access to a point, used to toggle start/end/twice or set energy.
    pub fn point_mut(&mut self, index: PointId) -> Option<&mut Point> {
        self.points.get_mut(index)
    }

    /// Appends a plain point and returns its index.
    pub fn add_point(&mut self, x: i32, y: i32) -> PointId {
        self.points.push(Point::new(x, y));
        self.points.len() - 1
    }

    /// Removes a point together with every edge touching it.
    ///
    /// Edge endpoints above `index` are shifted down by one so they keep
    /// referring to the same points.
    pub fn remove_point(&mut self, index: PointId) -> Result<Point, GraphError> {
        self.check_point(index)?;
        let removed = self.points.remove(index);

        self.edges.retain(|edge| !edge.touches(index));
        for edge in &mut self.edges {
            if edge.a > index {
                edge.a -= 1;
            }
            if edge.b > index {
                edge.b -= 1;
            }
        }
        Ok(removed)
    }

    /// Connects two points with an undirected edge and returns the edge index.
    ///
    /// # Errors
    /// Fails on out-of-range points, self loops, and when the pair is already
    /// connected in either orientation.
    pub fn add_edge(&mut self, a: PointId, b: PointId) -> Result<usize, GraphError> {
        self.insert_edge(a, b, Direction::None)
    }

    /// Like `add_edge`, with an explicit direction relative to the arguments
    /// as given (`AToB` means from `a` to `b` even when `a > b`).
    pub fn add_directed_edge(
        &mut self,
        a: PointId,
        b: PointId,
        direction: Direction,
    ) -> Result<usize, GraphError> {
        self.insert_edge(a, b, direction)
    }

    fn insert_edge(
        &mut self,
        a: PointId,
        b: PointId,
        direction: Direction,
    ) -> Result<usize, GraphError> {
        self.check_point(a)?;
        self.check_point(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if let Some(existing) = self.find_edge(a, b) {
            return Err(GraphError::DuplicateEdge { a, b, existing });
        }

        let edge = if a < b {
            Edge { a, b, direction }
        } else {
            Edge {
                a: b,
                b: a,
                direction: direction.reversed(),
            }
        };
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    pub fn remove_edge(&mut self, index: usize) -> Result<Edge, GraphError> {
        self.check_edge(index)?;
        Ok(self.edges.remove(index))
    }

    /// Advances an edge to its next direction and returns the new one.
    pub fn cycle_direction(&mut self, index: usize) -> Result<Direction, GraphError> {
        self.check_edge(index)?;
        let edge = &mut self.edges[index];
        edge.direction = edge.direction.next();
        Ok(edge.direction)
    }

    /// Finds the edge joining `a` and `b`, in either orientation.
    pub fn find_edge(&self, a: PointId, b: PointId) -> Option<usize> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .position(|edge| edge.a == lo && edge.b == hi)
    }

    /// Sum of all visit quotas, i.e. the length of a complete walk.
    pub fn total_visits(&self) -> usize {
        self.points.iter().map(|p| p.quota() as usize).sum()
    }

    fn check_point(&self, index: PointId) -> Result<(), GraphError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(GraphError::PointOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    fn check_edge(&self, index: usize) -> Result<(), GraphError> {
        if index < self.edges.len() {
            Ok(())
        } else {
            Err(GraphError::EdgeOutOfRange {
                index,
                len: self.edges.len(),
            })
        }
    }
}
