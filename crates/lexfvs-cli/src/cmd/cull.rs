//! Implementation of `lexfvs cull <dict> <removal>`.
use lexfvs_core::{CullMode, Dictionary, Solver};
use tracing::warn;

use crate::error::CliError;
use crate::format::print_keys;

/// Runs the `cull` command.
///
/// An infeasible input comes back unchanged, with a warning, since no
/// subset of it can be feasible.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    dict: Dictionary,
    removal: &[String],
    fixpoint: bool,
    compact: bool,
) -> Result<(), CliError> {
    let solver = Solver::new(dict);
    if !solver.verify(removal) {
        warn!(size = removal.len(), "input removal set is not feasible");
    }
    let mode = if fixpoint {
        CullMode::Fixpoint
    } else {
        CullMode::SinglePass
    };
    let culled = solver.cull(removal, mode);
    print_keys(&culled, compact)
}
