//! Greedy feedback-vertex-set construction.
//!
//! The constructor alternates two phases until the graph is empty:
//!
//! 1. **Cascade-strip**: every live vertex with live in-degree zero cannot
//!    lie on a cycle, so it is deleted for free. Each deletion may drop the
//!    in-degree of its successors to zero, so their ids are fed back into the
//!    worklist until nothing more can be stripped.
//! 2. **Evict**: whatever survives the cascade lies on or downstream of a
//!    cycle. The vertex with the highest live out-degree is popped from the
//!    scheduler, deleted, recorded in the removal sequence, and its
//!    successors seed the next cascade.
//!
//! The construction is destructive: the graph is empty when it returns.
//! Callers that want to refine the result must populate a fresh graph.

use tracing::{debug, info, warn};

use crate::graph::{DefinitionGraph, VertexId};

/// Repeatedly deletes live vertices with in-degree zero until none remain.
/// Returns the number of deleted vertices.
///
/// On an acyclic graph this empties the graph.
pub fn cascade_strip(graph: &mut DefinitionGraph) -> usize {
    let seeds: Vec<VertexId> = graph.live_ids().collect();
    cascade_from(graph, seeds)
}

/// Runs the cascade starting from `seeds` only.
pub(crate) fn cascade_from(graph: &mut DefinitionGraph, seeds: Vec<VertexId>) -> usize {
    let mut worklist = seeds;
    let mut stripped = 0;

    while let Some(id) = worklist.pop() {
        if !graph.is_live(id) || graph.in_degree(id) != 0 {
            continue;
        }
        let successors = graph.remove_vertex(id);
        graph.refresh_priorities(&successors);
        worklist.extend(successors);
        stripped += 1;
    }
    stripped
}

/// Computes a feedback vertex set greedily, emptying `graph`.
///
/// The returned keys are in eviction order. The set is valid (its removal,
/// together with the free words, leaves the graph acyclic) but not
/// necessarily minimum.
pub fn construct_fvs(graph: &mut DefinitionGraph) -> Vec<String> {
    let initial = graph.size();
    graph.seed_scheduler();

    let mut stripped = cascade_strip(graph);
    debug!(vertices = initial, stripped, "initial cascade finished");

    let mut removal: Vec<String> = Vec::new();
    while !graph.is_empty() {
        let Some(id) = graph.pop_max() else {
            warn!(
                remaining = graph.size(),
                "scheduler drained while vertices remain"
            );
            break;
        };
        if let Some(key) = graph.key_of(id) {
            removal.push(key.to_owned());
        }
        let successors = graph.remove_vertex(id);
        graph.refresh_priorities(&successors);
        stripped += cascade_from(graph, successors);
    }

    info!(
        vertices = initial,
        evicted = removal.len(),
        stripped,
        "greedy feedback vertex set constructed"
    );
    removal
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::oracle::verify;
    use crate::test_helpers::{graph_from_edges, keys};

    #[test]
    fn acyclic_graph_cascades_to_empty() {
        let mut g = graph_from_edges(&[("a", "b"), ("b", "c"), ("a", "c"), ("d", "c")]);
        assert_eq!(cascade_strip(&mut g), 4);
        assert!(g.is_empty());
    }

    #[test]
    fn cascade_stops_at_cycles() {
        let mut g = graph_from_edges(&[("x", "a"), ("a", "b"), ("b", "a"), ("b", "y")]);
        assert_eq!(cascade_strip(&mut g), 1);
        let mut left: Vec<&str> = g.keys().collect();
        left.sort_unstable();
        assert_eq!(left, vec!["a", "b", "y"]);
    }

    #[test]
    fn three_cycle_needs_one_eviction() {
        let edges = [("a", "b"), ("b", "c"), ("c", "a")];
        let mut g = graph_from_edges(&edges);
        let removal = construct_fvs(&mut g);
        assert_eq!(removal.len(), 1);
        assert!(["a", "b", "c"].contains(&removal[0].as_str()));
        assert!(g.is_empty());

        let fresh = graph_from_edges(&edges);
        assert!(verify(&fresh, &removal, &[]));
        assert!(!verify(&fresh, &[], &[]));
    }

    #[test]
    fn chain_needs_no_eviction() {
        let mut g = graph_from_edges(&[("x", "y"), ("y", "z")]);
        assert!(construct_fvs(&mut g).is_empty());
        assert!(g.is_empty());
    }

    #[test]
    fn disjoint_two_cycles_need_one_eviction_each() {
        let edges = [("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")];
        let mut g = graph_from_edges(&edges);
        let removal = construct_fvs(&mut g);
        assert_eq!(removal.len(), 2);
        let first_cycle = removal.iter().filter(|k| *k == "a" || *k == "b").count();
        let second_cycle = removal.iter().filter(|k| *k == "c" || *k == "d").count();
        assert_eq!((first_cycle, second_cycle), (1, 1));
    }

    #[test]
    fn highest_out_degree_is_evicted_first() {
        // `hub` sits on three cycles at once.
        let edges = [
            ("hub", "a"),
            ("a", "hub"),
            ("hub", "b"),
            ("b", "hub"),
            ("hub", "c"),
            ("c", "hub"),
        ];
        let mut g = graph_from_edges(&edges);
        assert_eq!(construct_fvs(&mut g), keys(&["hub"]));
    }

    #[test]
    fn result_verifies_on_tangled_graph() {
        let edges = [
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
            ("e", "c"),
            ("e", "f"),
            ("f", "g"),
            ("g", "e"),
            ("h", "a"),
            ("g", "i"),
        ];
        let fresh = graph_from_edges(&edges);
        let free = fresh.free_words();
        let mut g = graph_from_edges(&edges);
        let removal = construct_fvs(&mut g);
        assert!(!removal.is_empty());
        assert!(verify(&fresh, &removal, &free));
    }

    #[test]
    fn empty_graph_yields_empty_solution() {
        let mut g = DefinitionGraph::new();
        assert!(construct_fvs(&mut g).is_empty());
    }
}
