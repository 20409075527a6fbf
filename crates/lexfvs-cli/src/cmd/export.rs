//! Implementation of `lexfvs export <dict> [--removal FILE]`.
//!
//! Emits the definition graph in node-link form,
//! `{"nodes": [{"name": ..}], "links": [{"source": .., "target": ..}]}`.
//! With `--removal`, the listed words are deleted first, so exporting with a
//! feasible removal set (plus the free words) yields an acyclic graph.
use lexfvs_core::{Dictionary, Solver};
use tracing::debug;

use crate::error::CliError;
use crate::format::{stdout_error, write_json};

/// Runs the `export` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(dict: Dictionary, removal: &[String], compact: bool) -> Result<(), CliError> {
    let mut graph = Solver::new(dict).build_graph();
    for key in removal {
        graph.delete_vertex(key);
    }
    let doc = graph.to_node_link();
    debug!(
        nodes = doc.nodes.len(),
        links = doc.links.len(),
        "node-link document built"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, &doc, compact).map_err(stdout_error)
}
