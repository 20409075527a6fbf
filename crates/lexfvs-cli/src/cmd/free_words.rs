//! Implementation of `lexfvs free-words <dict>`.
//!
//! Prints the words that never occur in another word's definition as a JSON
//! array, in dictionary order.
use lexfvs_core::{Dictionary, Solver};
use tracing::info;

use crate::error::CliError;
use crate::format::print_keys;

/// Runs the `free-words` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(dict: Dictionary, compact: bool) -> Result<(), CliError> {
    let free = Solver::new(dict).free_words();
    info!(count = free.len(), "free words listed");
    print_keys(&free, compact)
}
