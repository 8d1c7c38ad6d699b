use serde::Serialize;
use std::fmt;

/// Weight of a single edge. Must be non-negative.
pub type Weight = i64;

/// Accumulated cost of a path (sum of edge weights)
pub type Cost = i64;

/// Weight used when an edge is added without an explicit one
pub const DEFAULT_WEIGHT: Weight = 1;

/// A directed, weighted connection to `target`.
///
/// Edges are plain values; the owning vertex is the adjacency entry they
/// are stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<V> {
    pub target: V,
    pub weight: Weight,
}

impl<V> Edge<V> {
    pub fn new(target: V, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

/// Options for [`WeightedGraph::add_edge`](crate::graph::WeightedGraph::add_edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOptions {
    /// Edge weight (default 1)
    pub weight: Weight,
    /// Also insert the reverse edge with the same weight
    pub bidirectional: bool,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            bidirectional: false,
        }
    }
}

impl EdgeOptions {
    /// Directed edge with the given weight
    pub fn weighted(weight: Weight) -> Self {
        Self {
            weight,
            bidirectional: false,
        }
    }

    /// Edge in both directions with the given weight
    pub fn bidirectional(weight: Weight) -> Self {
        Self {
            weight,
            bidirectional: true,
        }
    }
}

/// A cost-optimal path between two vertices.
///
/// `path` always starts with the search's start vertex and ends with its
/// target; a search from a vertex to itself yields `[start]` at cost 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    pub cost: Cost,
    pub path: Vec<V>,
}

impl<V> ShortestPath<V> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&V> {
        self.path.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.path.last()
    }
}

impl<V: fmt::Display> fmt::Display for ShortestPath<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
