use crate::graph::store::AdjacencyStore;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// State tracked during BFS traversal
struct BfsState<V> {
    visited: HashSet<V>,
    queue: VecDeque<V>,
}

impl<V: Eq + Hash + Clone> BfsState<V> {
    fn seeded(start: &V) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());
        Self { visited, queue }
    }

    /// Queue `vertex` unless it was already seen. Marking happens here, at
    /// enqueue time, so a vertex with several in-edges is queued once.
    fn enqueue(&mut self, vertex: &V) {
        if self.visited.insert(vertex.clone()) {
            self.queue.push_back(vertex.clone());
        }
    }
}

/// Breadth-first traversal from `start`, ignoring weights.
///
/// `visit` is called exactly once per reachable vertex, in BFS order,
/// starting with `start` itself. Returns the number of visited vertices.
/// The caller decides what an unknown start means; this function simply
/// visits `start` and finds it has no neighbours.
pub fn bfs_traverse<V, F>(store: &AdjacencyStore<V>, start: &V, mut visit: F) -> usize
where
    V: Eq + Hash + Clone,
    F: FnMut(&V),
{
    let mut state = BfsState::seeded(start);
    let mut count = 0;

    while let Some(current) = state.queue.pop_front() {
        visit(&current);
        count += 1;

        for edge in store.neighbors(&current) {
            state.enqueue(&edge.target);
        }
    }

    count
}
