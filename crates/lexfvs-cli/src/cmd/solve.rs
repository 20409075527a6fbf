//! Implementation of `lexfvs solve <dict>`.
//!
//! Runs the greedy constructor and prints the removal sequence in eviction
//! order.
use lexfvs_core::{Dictionary, Solver};

use crate::error::CliError;
use crate::format::print_keys;

/// Runs the `solve` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(dict: Dictionary, compact: bool) -> Result<(), CliError> {
    let removal = Solver::new(dict).construct();
    print_keys(&removal, compact)
}
