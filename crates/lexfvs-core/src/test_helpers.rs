//! Shared test helper functions for building small definition graphs.
//!
//! This module is compiled only in test builds. Integration tests under
//! `crates/lexfvs-core/tests/` define their own helpers because they link
//! against the non-test library build.

use crate::graph::DefinitionGraph;

/// Builds a graph from `(from, to)` pairs, adding endpoints in first-seen
/// order before any edge.
pub fn graph_from_edges(edges: &[(&str, &str)]) -> DefinitionGraph {
    let mut g = DefinitionGraph::new();
    for &(from, to) in edges {
        g.add_vertex(from);
        g.add_vertex(to);
    }
    for &(from, to) in edges {
        g.add_edge(from, to);
    }
    g
}

/// Converts string slices into owned keys.
pub fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
