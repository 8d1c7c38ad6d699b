//! Path reconstruction from search results
//!
//! Pure functions over the cost and parent maps produced by a search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::types::{Cost, ShortestPath};

/// Walk parent pointers back from `end` and return the path `start..=end`.
///
/// Stops at `start`, or earlier if a vertex has no recorded parent. The
/// early stop only happens when `end` was never reached; callers check the
/// cost map first, so a returned path always begins with `start` in
/// practice.
pub fn reconstruct_path<V>(start: &V, end: &V, parents: &HashMap<V, V>) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        // A well-formed parent map is acyclic; bail out on a malformed one
        // instead of walking it forever.
        if path.len() > parents.len() {
            break;
        }
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// Turn the maps of a finished search into a [`ShortestPath`].
///
/// Returns `None` when `end` has no known cost, i.e. it was not reached.
pub fn build_shortest_path<V>(
    start: &V,
    end: &V,
    costs: &HashMap<V, Cost>,
    parents: &HashMap<V, V>,
) -> Option<ShortestPath<V>>
where
    V: Eq + Hash + Clone,
{
    let cost = *costs.get(end)?;
    let path = reconstruct_path(start, end, parents);

    if path.first() != Some(start) {
        // Parent chain broken; treat as unreachable rather than report a
        // path that does not begin at the start vertex.
        tracing::warn!("parent chain does not lead back to start");
        return None;
    }

    Some(ShortestPath { cost, path })
}

/// Shortest paths from one start vertex to everything it can reach
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V> {
    start: V,
    costs: HashMap<V, Cost>,
    parents: HashMap<V, V>,
}

impl<V: Eq + Hash + Clone> ShortestPathTree<V> {
    /// Wrap the maps of an exhaustive search from `start`.
    ///
    /// Every vertex in `costs` must carry its final cost.
    pub fn new(start: V, costs: HashMap<V, Cost>, parents: HashMap<V, V>) -> Self {
        Self {
            start,
            costs,
            parents,
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// Minimal cost from the start to `vertex`, if reachable
    pub fn cost_to(&self, vertex: &V) -> Option<Cost> {
        self.costs.get(vertex).copied()
    }

    /// Shortest path from the start to `vertex`, if reachable
    pub fn path_to(&self, vertex: &V) -> Option<ShortestPath<V>> {
        build_shortest_path(&self.start, vertex, &self.costs, &self.parents)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.costs.contains_key(vertex)
    }

    /// Reachable vertices with their costs, in arbitrary order
    pub fn reachable(&self) -> impl Iterator<Item = (&V, Cost)> {
        self.costs.iter().map(|(v, c)| (v, *c))
    }

    /// Number of reachable vertices, including the start
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_reconstruct_linear_chain() {
        let p = parents(&[("B", "A"), ("C", "B"), ("D", "C")]);
        assert_eq!(reconstruct_path(&"A", &"D", &p), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_reconstruct_start_equals_end() {
        let p = parents(&[]);
        assert_eq!(reconstruct_path(&"A", &"A", &p), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_stops_when_chain_breaks() {
        // "X" has no parent and is not the start
        let p = parents(&[("Y", "X")]);
        assert_eq!(reconstruct_path(&"A", &"Y", &p), vec!["X", "Y"]);
    }

    #[test]
    fn test_reconstruct_ignores_parent_of_start() {
        // A parent recorded for the start itself must not be followed
        let p = parents(&[("A", "Z"), ("B", "A")]);
        assert_eq!(reconstruct_path(&"A", &"B", &p), vec!["A", "B"]);
    }

    #[test]
    fn test_reconstruct_terminates_on_cyclic_map() {
        let p = parents(&[("X", "Y"), ("Y", "X")]);
        let path = reconstruct_path(&"A", &"X", &p);
        assert!(path.len() <= 3);
        assert_ne!(path.first(), Some(&"A"));
    }

    #[test]
    fn test_build_shortest_path() {
        let p = parents(&[("C", "A"), ("D", "C")]);
        let costs: HashMap<_, _> = [("A", 0), ("C", 2), ("D", 5)].into_iter().collect();

        let sp = build_shortest_path(&"A", &"D", &costs, &p).unwrap();
        assert_eq!(sp.cost, 5);
        assert_eq!(sp.path, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_build_shortest_path_unreached() {
        let costs: HashMap<_, _> = [("A", 0)].into_iter().collect();
        let missing = build_shortest_path(&"A", &"X", &costs, &parents(&[]));
        assert!(missing.is_none());
    }

    #[test]
    fn test_tree_lookups() {
        let costs: HashMap<_, _> = [("A", 0), ("B", 5), ("C", 2), ("D", 5)]
            .into_iter()
            .collect();
        let p = parents(&[("B", "A"), ("C", "A"), ("D", "C")]);
        let tree = ShortestPathTree::new("A", costs, p);

        assert_eq!(tree.start(), &"A");
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.cost_to(&"D"), Some(5));
        assert_eq!(tree.path_to(&"D").unwrap().path, vec!["A", "C", "D"]);
        assert_eq!(tree.path_to(&"A").unwrap().path, vec!["A"]);
        assert!(tree.path_to(&"Z").is_none());
        assert!(!tree.is_reachable(&"Z"));
        assert_eq!(tree.reachable().map(|(_, c)| c).sum::<Cost>(), 12);
    }

    #[test]
    fn test_build_shortest_path_broken_chain() {
        let costs: HashMap<_, _> = [("A", 0), ("Y", 3)].into_iter().collect();
        let p = parents(&[("Y", "X")]);
        assert!(build_shortest_path(&"A", &"Y", &costs, &p).is_none());
    }
}
