#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod anneal;
pub mod cull;
pub mod dictionary;
pub mod fvs;
pub mod graph;
pub mod oracle;
pub mod solver;

#[cfg(test)]
mod test_helpers;

pub use anneal::{
    AnnealConfig, AnnealConfigError, AnnealResult, AnnealStats, Annealer, Move, StepOutcome,
    anneal,
};
pub use cull::{CullMode, cull};
pub use dictionary::{Dictionary, DictionaryError, GraphSource, parse_key_list};
pub use fvs::{cascade_strip, construct_fvs};
pub use graph::{
    DefinitionGraph, Link, NodeLinkGraph, NodeName, SccSummary, Scheduler, Vertex, VertexId,
};
pub use oracle::{Oracle, cascade_residue, verify, verify_by_cascade, verify_with_roots};
pub use solver::Solver;

/// Returns the current version of the lexfvs-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
