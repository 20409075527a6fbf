//! Implementation of `lexfvs verify <dict> <removal>`.
//!
//! Prints whether the removal set, together with the free words, breaks
//! every definition cycle. Exit codes: 0 = feasible, 1 = infeasible,
//! 2 = input failure.
use std::io::Write;

use lexfvs_core::{Dictionary, Oracle, Solver, cascade_residue};
use serde::Serialize;

use crate::error::CliError;
use crate::format::{Report, print_report};
use crate::{OutputFormat, VerifyMethod};

/// Verdict for one removal set.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// `"dfs"` or `"cascade"`.
    pub method: &'static str,
    /// Whether every cycle is broken.
    pub feasible: bool,
    /// Words in the removal set.
    pub removal_size: usize,
    /// Removal words the dictionary does not contain.
    pub unknown_words: usize,
    /// Free words of the dictionary.
    pub free_words: usize,
    /// Words the cascade could not strip (cascade method only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residue: Option<usize>,
}

impl VerifyReport {
    /// Computes the verdict for `removal` with `method`.
    pub fn compute(dict: Dictionary, removal: &[String], method: VerifyMethod) -> Self {
        let graph = Solver::new(dict).build_graph();
        let free = graph.free_words();
        let unknown_words = removal.iter().filter(|k| !graph.contains(k)).count();

        let (method, feasible, residue) = match method {
            VerifyMethod::Dfs => ("dfs", Oracle::new(&graph, &free).is_feasible(removal), None),
            VerifyMethod::Cascade => {
                let residue = cascade_residue(&graph, removal, &free);
                ("cascade", residue == 0, Some(residue))
            }
        };

        Self {
            method,
            feasible,
            removal_size: removal.len(),
            unknown_words,
            free_words: free.len(),
            residue,
        }
    }
}

impl Report for VerifyReport {
    fn write_human<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "verified:       {}", self.feasible)?;
        writeln!(w, "method:         {}", self.method)?;
        writeln!(w, "removal_size:   {}", self.removal_size)?;
        writeln!(w, "free_words:     {}", self.free_words)?;
        if self.unknown_words > 0 {
            writeln!(w, "unknown_words:  {}", self.unknown_words)?;
        }
        if let Some(residue) = self.residue {
            writeln!(w, "residue:        {residue}")?;
        }
        Ok(())
    }
}

/// Runs the `verify` command.
///
/// # Errors
///
/// [`CliError::Infeasible`] (exit code 1) after printing the report when the
/// set leaves a cycle; [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    dict: Dictionary,
    removal: &[String],
    method: VerifyMethod,
    format: &OutputFormat,
    compact: bool,
) -> Result<(), CliError> {
    let report = VerifyReport::compute(dict, removal, method);
    print_report(&report, format, compact)?;
    if report.feasible {
        Ok(())
    } else {
        Err(CliError::Infeasible {
            removal_size: report.removal_size,
        })
    }
}
