use super::*;
use crate::graph::trace::{NoopObserver, TraceEvent, TraceLog};
use crate::graph::types::Weight;

fn store_from(edges: &[(&'static str, &'static str, Weight)]) -> AdjacencyStore<&'static str> {
    let mut store = AdjacencyStore::new();
    for &(from, to, weight) in edges {
        store.insert(from, to, weight);
    }
    store
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: "A",
        accumulated_cost: 1,
        seq: 0,
    };
    let entry2 = HeapEntry {
        vertex: "B",
        accumulated_cost: 2,
        seq: 1,
    };
    let entry3 = HeapEntry {
        vertex: "C",
        accumulated_cost: 1,
        seq: 2,
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal costs fall back to push order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry3);
}

/// Equal-cost entries pop in the order they were pushed
#[test]
fn test_heap_pops_ties_fifo() {
    let mut state = DijkstraState::new();
    state.push("first", 3);
    state.push("second", 3);
    state.push("cheap", 1);
    state.push("third", 3);

    let order: Vec<_> =
        std::iter::from_fn(|| state.heap.pop().map(|Reverse(e)| e.vertex)).collect();
    assert_eq!(order, vec!["cheap", "first", "second", "third"]);
}

#[test]
fn test_costs_and_parents_for_full_run() {
    let store = store_from(&[("A", "B", 5), ("A", "C", 2), ("C", "D", 3), ("B", "D", 10)]);

    let outcome = dijkstra_search(&store, &"A", None, &mut NoopObserver);

    assert!(!outcome.reached_target);
    assert_eq!(outcome.costs[&"A"], 0);
    assert_eq!(outcome.costs[&"B"], 5);
    assert_eq!(outcome.costs[&"C"], 2);
    assert_eq!(outcome.costs[&"D"], 5);
    assert_eq!(outcome.parents[&"D"], "C");
    assert_eq!(outcome.finalized.len(), 4);
    assert!(!outcome.parents.contains_key(&"A"));
}

#[test]
fn test_early_termination_leaves_far_vertices_unfinalized() {
    // A -1-> B -1-> C -100-> D
    let store = store_from(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 100)]);

    let outcome = dijkstra_search(&store, &"A", Some(&"B"), &mut NoopObserver);

    assert!(outcome.reached_target);
    assert!(outcome.finalized.contains(&"B"));
    assert!(!outcome.finalized.contains(&"C"));
    // B was never expanded, so C was never even discovered
    assert!(!outcome.costs.contains_key(&"C"));
}

#[test]
fn test_stale_entries_are_skipped() {
    // D is first discovered via B at cost 11, then improved via C at 3.
    // The cost-11 entry stays queued and must be discarded when popped.
    let store = store_from(&[("A", "B", 1), ("A", "C", 2), ("B", "D", 10), ("C", "D", 1)]);

    let mut log = TraceLog::new();
    let outcome = dijkstra_search(&store, &"A", None, &mut log);

    assert_eq!(outcome.costs[&"D"], 3);
    assert_eq!(outcome.parents[&"D"], "C");
    assert_eq!(log.stale_count(), 1);
    assert!(log.events().contains(&TraceEvent::Stale {
        vertex: "D",
        cost: 11
    }));
    assert_eq!(log.finalized_order(), &["A", "B", "C", "D"]);
}

#[test]
fn test_parallel_edges_cheapest_wins() {
    let store = store_from(&[("A", "B", 9), ("A", "B", 4), ("A", "B", 6)]);

    let outcome = dijkstra_search(&store, &"A", Some(&"B"), &mut NoopObserver);

    assert!(outcome.reached_target);
    assert_eq!(outcome.costs[&"B"], 4);
}

#[test]
fn test_self_loop_never_improves() {
    let store = store_from(&[("A", "A", 0), ("A", "B", 2), ("B", "B", 1)]);

    let mut log = TraceLog::new();
    let outcome = dijkstra_search(&store, &"A", None, &mut log);

    assert_eq!(outcome.costs[&"A"], 0);
    assert_eq!(outcome.costs[&"B"], 2);
    assert!(!outcome.parents.contains_key(&"A"));
    assert_eq!(outcome.parents[&"B"], "A");
}

#[test]
fn test_start_as_target_stops_immediately() {
    let store = store_from(&[("A", "B", 1)]);

    let mut log = TraceLog::new();
    let outcome = dijkstra_search(&store, &"A", Some(&"A"), &mut log);

    assert!(outcome.reached_target);
    assert_eq!(
        log.events(),
        &[
            TraceEvent::Pop {
                vertex: "A",
                cost: 0
            },
            TraceEvent::Finalize {
                vertex: "A",
                cost: 0,
                finalized: vec!["A"],
            },
            TraceEvent::TargetReached {
                vertex: "A",
                cost: 0
            },
        ]
    );
}

#[test]
fn test_unknown_start_has_no_neighbors() {
    let store = store_from(&[("A", "B", 1)]);

    let outcome = dijkstra_search(&store, &"Z", Some(&"A"), &mut NoopObserver);

    assert!(!outcome.reached_target);
    assert_eq!(outcome.finalized.len(), 1);
    assert_eq!(outcome.costs.len(), 1);
}

#[test]
fn test_negative_cycle_still_terminates() {
    // Only reachable when validation is disabled; the search must not
    // loop and the parent chain must stay acyclic.
    let store = store_from(&[("A", "B", 1), ("B", "C", -5), ("C", "B", 1), ("C", "D", 1)]);

    let outcome = dijkstra_search(&store, &"A", Some(&"D"), &mut NoopObserver);

    assert!(outcome.reached_target);
    let path = crate::graph::path::reconstruct_path(&"A", &"D", &outcome.parents);
    assert_eq!(path, vec!["A", "B", "C", "D"]);
}
