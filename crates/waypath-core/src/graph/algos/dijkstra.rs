use crate::graph::store::AdjacencyStore;
use crate::graph::trace::{Relaxation, SearchObserver};
use crate::graph::types::Cost;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Priority queue entry, ordered by accumulated cost then push order.
///
/// `seq` makes equal-cost entries pop first-in first-out, so the reported
/// path among several equally cheap ones does not depend on heap internals.
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub accumulated_cost: Cost,
    pub seq: u64,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.accumulated_cost == other.accumulated_cost && self.seq == other.seq
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Everything a finished search knows about the vertices it touched
#[derive(Debug, Clone)]
pub struct SearchOutcome<V> {
    /// Best known cost per reached vertex (final for finalized ones)
    pub costs: HashMap<V, Cost>,
    /// Predecessor that achieved each vertex's current cost
    pub parents: HashMap<V, V>,
    /// Vertices whose cost is proven minimal
    pub finalized: HashSet<V>,
    /// Whether the loop stopped because the target was finalized
    pub reached_target: bool,
}

/// Working set of one search. Created per call, never shared.
struct DijkstraState<V> {
    costs: HashMap<V, Cost>,
    parents: HashMap<V, V>,
    finalized: HashSet<V>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    next_seq: u64,
}

impl<V: Eq + Hash + Clone> DijkstraState<V> {
    fn new() -> Self {
        Self {
            costs: HashMap::new(),
            parents: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, vertex: V, accumulated_cost: Cost) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            accumulated_cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn into_outcome(self, reached_target: bool) -> SearchOutcome<V> {
        SearchOutcome {
            costs: self.costs,
            parents: self.parents,
            finalized: self.finalized,
            reached_target,
        }
    }
}

/// Relax every outgoing edge of the freshly finalized vertex `current`
fn relax_neighbors<V, O>(
    store: &AdjacencyStore<V>,
    current: &V,
    current_cost: Cost,
    state: &mut DijkstraState<V>,
    observer: &mut O,
) where
    V: Eq + Hash + Clone,
    O: SearchObserver<V> + ?Sized,
{
    for edge in store.neighbors(current) {
        let candidate = current_cost.saturating_add(edge.weight);
        let previous = state.costs.get(&edge.target).copied();

        // Finalized targets are never updated, so the parent map stays
        // acyclic even when negative weights were let through.
        let improved =
            !state.finalized.contains(&edge.target) && previous.is_none_or(|prev| candidate < prev);

        observer.on_relax(&Relaxation {
            from: current.clone(),
            to: edge.target.clone(),
            weight: edge.weight,
            candidate,
            previous,
            improved,
        });

        if improved {
            state.costs.insert(edge.target.clone(), candidate);
            state.parents.insert(edge.target.clone(), current.clone());
            // Any older entry for the target stays queued and is skipped
            // as stale when popped.
            state.push(edge.target.clone(), candidate);
        }
    }
}

/// Run Dijkstra from `start`, stopping early once `target` is finalized.
///
/// With `target == None` the search runs until the queue is empty and the
/// outcome holds final costs for every vertex reachable from `start`.
///
/// The queue uses lazy deletion instead of decrease-key: each improvement
/// pushes a fresh entry and leaves the old one behind. A vertex can
/// therefore appear several times in the queue, and every entry popped for
/// an already finalized vertex must be discarded. Do not assume one entry
/// per vertex.
pub fn dijkstra_search<V, O>(
    store: &AdjacencyStore<V>,
    start: &V,
    target: Option<&V>,
    observer: &mut O,
) -> SearchOutcome<V>
where
    V: Eq + Hash + Clone,
    O: SearchObserver<V> + ?Sized,
{
    let mut state = DijkstraState::new();
    state.costs.insert(start.clone(), 0);
    state.push(start.clone(), 0);

    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
        ..
    })) = state.heap.pop()
    {
        observer.on_pop(&current, accumulated_cost);

        if state.finalized.contains(&current) {
            observer.on_stale(&current, accumulated_cost);
            continue;
        }

        state.finalized.insert(current.clone());
        observer.on_finalize(&current, accumulated_cost, &state.finalized);

        if target == Some(&current) {
            observer.on_target_reached(&current, accumulated_cost);
            return state.into_outcome(true);
        }

        relax_neighbors(store, &current, accumulated_cost, &mut state, observer);
    }

    state.into_outcome(false)
}

#[cfg(test)]
mod tests;
