//! Implementation of `lexfvs anneal <dict> <removal>`.
//!
//! Refines a feasible removal set by simulated annealing and prints the
//! final set. The run is reproducible for a given `--seed`; without one a
//! seed is drawn at random and logged so the run can be repeated.
use lexfvs_core::{AnnealConfig, Dictionary, Solver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::error::CliError;
use crate::format::print_keys;

/// Annealing flags as parsed from the command line.
#[derive(Debug, Clone)]
pub struct AnnealArgs {
    /// RNG seed, if given.
    pub seed: Option<u64>,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Temperature decrease per iteration.
    pub cooling_rate: f64,
    /// Shrink proposal weight.
    pub shrink_weight: u32,
    /// Shrink retry cap.
    pub shrink_attempts: Option<usize>,
}

impl AnnealArgs {
    /// Maps the flags onto the library configuration.
    pub fn config(&self) -> AnnealConfig {
        AnnealConfig {
            initial_temperature: self.initial_temperature,
            cooling_rate: self.cooling_rate,
            shrink_weight: self.shrink_weight,
            shrink_attempt_limit: self.shrink_attempts,
        }
    }
}

/// Runs the `anneal` command.
///
/// # Errors
///
/// [`CliError::InvalidSchedule`] if the temperature would never reach zero;
/// [`CliError::Infeasible`] if the starting set leaves a cycle, since every
/// state of the search must be feasible; [`CliError::IoError`] if stdout
/// cannot be written.
pub fn run(
    dict: Dictionary,
    removal: &[String],
    args: &AnnealArgs,
    compact: bool,
) -> Result<(), CliError> {
    let config = args.config();
    config.validate()?;

    let solver = Solver::new(dict);
    if !solver.verify(removal) {
        return Err(CliError::Infeasible {
            removal_size: removal.len(),
        });
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "annealing seed");

    let result = solver.anneal(removal, config, StdRng::seed_from_u64(seed))?;
    info!(
        smallest = result.stats.smallest,
        shrink_fallbacks = result.stats.shrink_fallbacks,
        idle = result.stats.idle,
        "annealing statistics"
    );
    print_keys(&result.solution, compact)
}
