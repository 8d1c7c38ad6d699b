//! Adjacency storage for weighted graphs
//!
//! Maps each source vertex to its outgoing edges in insertion order. A
//! vertex that only ever appears as an edge target has no entry; lookups
//! for it yield an empty neighbour list.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::types::{Edge, Weight};

#[derive(Debug, Clone)]
pub struct AdjacencyStore<V> {
    adjacency: HashMap<V, Vec<Edge<V>>>,
}

impl<V> Default for AdjacencyStore<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> AdjacencyStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge `source -> target`. Parallel edges are kept.
    pub fn insert(&mut self, source: V, target: V, weight: Weight) {
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
    }

    /// Outgoing edges of `vertex`, in insertion order
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `vertex` has an adjacency entry (was ever a source)
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices with an adjacency entry
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Vertices with an adjacency entry, in arbitrary order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Cheapest weight among the edges `source -> target`, if any
    pub fn min_weight(&self, source: &V, target: &V) -> Option<Weight> {
        self.neighbors(source)
            .iter()
            .filter(|edge| &edge.target == target)
            .map(|edge| edge.weight)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_entry() {
        let mut store = AdjacencyStore::new();
        assert!(!store.contains(&"A"));

        store.insert("A", "B", 3);
        assert!(store.contains(&"A"));
        // Targets do not get an entry of their own
        assert!(!store.contains(&"B"));
        assert_eq!(store.vertex_count(), 1);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_preserve_insertion_order() {
        let mut store = AdjacencyStore::new();
        store.insert("A", "C", 1);
        store.insert("A", "B", 2);
        store.insert("A", "D", 3);

        let targets: Vec<_> = store.neighbors(&"A").iter().map(|e| e.target).collect();
        assert_eq!(targets, vec!["C", "B", "D"]);
    }

    #[test]
    fn test_neighbors_of_unknown_vertex_is_empty() {
        let store: AdjacencyStore<&str> = AdjacencyStore::new();
        assert!(store.neighbors(&"missing").is_empty());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut store = AdjacencyStore::new();
        store.insert("A", "B", 9);
        store.insert("A", "B", 4);

        assert_eq!(store.neighbors(&"A").len(), 2);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.min_weight(&"A", &"B"), Some(4));
        assert_eq!(store.min_weight(&"B", &"A"), None);
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut store = AdjacencyStore::new();
        store.insert(1, 1, 0);
        assert_eq!(store.neighbors(&1), &[Edge::new(1, 0)]);
    }
}
