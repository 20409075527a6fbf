//! Post-operation invariant checkers for correctness validation.
//!
//! Each checker returns `Err` with a description of the first violation so
//! benches can assert on their setup and tests can report what broke.

use std::collections::HashSet;

use lexfvs_core::{DefinitionGraph, Dictionary, Oracle, verify, verify_by_cascade};
use petgraph::algo::is_cyclic_directed;

/// Verifies that `graph` is a faithful population of `dict`: every word is
/// a vertex, every definition word has an edge to its headword, adjacency is
/// symmetric, and there are no self-loops or duplicate edges.
pub fn check_graph_invariants(dict: &Dictionary, graph: &DefinitionGraph) -> Result<(), String> {
    let mut words: HashSet<&str> = HashSet::new();
    for headword in dict.headwords() {
        words.insert(headword);
        for token in dict.definition(headword).unwrap_or_default() {
            if token.is_empty() {
                continue;
            }
            words.insert(token.as_str());
            if token != headword && !graph.has_edge(token, headword) {
                return Err(format!("missing edge {token} -> {headword}"));
            }
        }
    }
    if graph.size() != words.len() {
        return Err(format!(
            "vertex count mismatch: graph={}, distinct words={}",
            graph.size(),
            words.len()
        ));
    }

    let mut edges = 0usize;
    for key in graph.keys() {
        let outs = graph.out_neighbors(key);
        if outs.contains(&key) {
            return Err(format!("self-loop on {key}"));
        }
        let distinct: HashSet<&str> = outs.iter().copied().collect();
        if distinct.len() != outs.len() {
            return Err(format!("duplicate out-edge on {key}"));
        }
        for target in outs {
            if !graph.in_neighbors(target).contains(&key) {
                return Err(format!("{key} -> {target} missing from in-list of {target}"));
            }
        }
        edges += distinct.len();
    }
    if edges != graph.edge_count() {
        return Err(format!(
            "edge count mismatch: counted={edges}, reported={}",
            graph.edge_count()
        ));
    }
    Ok(())
}

/// Verifies that deleting `removal` and `free` from `graph` leaves an
/// acyclic graph, judged by petgraph rather than by the crate's oracles.
pub fn check_removal_feasible(
    graph: &DefinitionGraph,
    removal: &[String],
    free: &[String],
) -> Result<(), String> {
    let mut residual = graph.clone();
    for key in removal.iter().chain(free) {
        residual.delete_vertex(key);
    }
    if is_cyclic_directed(&residual.to_petgraph()) {
        return Err(format!(
            "removal set of {} words leaves a cycle among {} remaining words",
            removal.len(),
            residual.size()
        ));
    }
    Ok(())
}

/// Verifies that the DFS oracle, the cascade oracle and petgraph give the
/// same verdict for `removal`.
pub fn check_oracles_agree(
    graph: &DefinitionGraph,
    removal: &[String],
    free: &[String],
) -> Result<(), String> {
    let dfs = verify(graph, removal, free);
    let cascade = verify_by_cascade(graph, removal, free);
    let reference = check_removal_feasible(graph, removal, free).is_ok();
    if dfs != reference || cascade != reference {
        return Err(format!(
            "oracle disagreement: dfs={dfs}, cascade={cascade}, petgraph={reference}"
        ));
    }
    Ok(())
}

/// Verifies a refiner's output: an order-preserving subset of `before` that
/// is feasible whenever `before` was.
pub fn check_refinement(
    oracle: &Oracle<'_>,
    before: &[String],
    after: &[String],
) -> Result<(), String> {
    let mut cursor = before.iter();
    for key in after {
        if !cursor.any(|k| k == key) {
            return Err(format!("{key} is not in the input set, or is out of order"));
        }
    }
    if oracle.is_feasible(before) && !oracle.is_feasible(after) {
        return Err("refinement lost feasibility".to_owned());
    }
    Ok(())
}

/// Verifies an annealing result: feasible, with no repeated words.
pub fn check_annealed(oracle: &Oracle<'_>, solution: &[String]) -> Result<(), String> {
    let distinct: HashSet<&String> = solution.iter().collect();
    if distinct.len() != solution.len() {
        return Err("annealed set contains duplicates".to_owned());
    }
    if !oracle.is_feasible(solution) {
        return Err("annealed set is infeasible".to_owned());
    }
    Ok(())
}
