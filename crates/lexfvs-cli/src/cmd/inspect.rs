//! Implementation of `lexfvs inspect <dict>`.
//!
//! Prints summary statistics for a dictionary's definition graph:
//! - headword, vertex, and edge counts
//! - free-word count
//! - strongly connected components that contain cycles, the number of words
//!   on them, and the size of the largest component
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
use std::io::Write;

use lexfvs_core::{Dictionary, Solver};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{Report, print_report};

/// Statistics gathered from a dictionary.
#[derive(Debug, Serialize)]
pub struct InspectStats {
    /// Entries in the dictionary file.
    pub headwords: usize,
    /// Distinct words (headwords plus definition words).
    pub vertices: usize,
    /// Distinct (definition word → headword) pairs.
    pub edges: usize,
    /// Words with no definition words.
    pub free_words: usize,
    /// Strongly connected components with more than one word.
    pub cyclic_components: usize,
    /// Words inside those components.
    pub words_on_cycles: usize,
    /// Size of the largest strongly connected component.
    pub largest_component: usize,
}

impl InspectStats {
    /// Computes statistics for `dict`.
    pub fn from_dictionary(dict: Dictionary) -> Self {
        let headwords = dict.len();
        let graph = Solver::new(dict).build_graph();
        let scc = graph.scc_summary();
        Self {
            headwords,
            vertices: graph.size(),
            edges: graph.edge_count(),
            free_words: graph.free_words().len(),
            cyclic_components: scc.cyclic_components,
            words_on_cycles: scc.vertices_on_cycles,
            largest_component: scc.largest_component,
        }
    }
}

impl Report for InspectStats {
    fn write_human<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "headwords:          {}", self.headwords)?;
        writeln!(w, "vertices:           {}", self.vertices)?;
        writeln!(w, "edges:              {}", self.edges)?;
        writeln!(w, "free_words:         {}", self.free_words)?;
        writeln!(w, "cyclic_components:  {}", self.cyclic_components)?;
        writeln!(w, "words_on_cycles:    {}", self.words_on_cycles)?;
        writeln!(w, "largest_component:  {}", self.largest_component)
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(dict: Dictionary, format: &OutputFormat, compact: bool) -> Result<(), CliError> {
    let stats = InspectStats::from_dictionary(dict);
    print_report(&stats, format, compact)
}
