//! Simulated-annealing refinement of a removal set.
//!
//! The search state is `current`, a feasible removal set, plus its
//! complement among the live vertices. Each iteration proposes a neighbour:
//!
//! - **shrink** (weight `shrink_weight` out of `shrink_weight + 1`): drop a
//!   random member, re-drawing until the oracle accepts the reduced set;
//! - **grow** (the remaining weight): add a random complement member. Adding
//!   a vertex to a removal set can never create a cycle, so growth needs no
//!   oracle call.
//!
//! With `ΔE = |current| − |next|`, improving proposals are always accepted
//! and worsening ones with probability `exp(ΔE / T)`. The temperature falls
//! linearly, `T = T₀ − step·ε`, and the search stops as soon as `T <= 0`.
//!
//! Shrink retries are capped by [`AnnealConfig::shrink_attempt_limit`]. When
//! the cap is hit, or `current` is empty, the iteration falls back to a grow
//! move, so a locally minimal `current` can never stall the loop.
//!
//! The schedule must reach zero in finitely many steps, so
//! [`AnnealConfig::validate`] rejects a non-finite `T₀` and a cooling rate
//! that is not a positive finite number. [`Annealer::new`] refuses such a
//! configuration.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::oracle::Oracle;

/// Tuning knobs for [`Annealer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealConfig {
    /// Starting temperature `T₀`.
    ///
    /// Default: 5.0.
    pub initial_temperature: f64,

    /// Temperature decrease per iteration `ε`.
    ///
    /// Default: 0.0001, i.e. 50 000 iterations from the default `T₀`.
    pub cooling_rate: f64,

    /// Relative weight of shrink proposals; grow proposals have weight 1.
    ///
    /// Default: 5.
    pub shrink_weight: u32,

    /// Maximum random draws per shrink proposal before falling back to grow.
    ///
    /// `None` uses the size of `current` at the time of the proposal.
    pub shrink_attempt_limit: Option<usize>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5.0,
            cooling_rate: 0.0001,
            shrink_weight: 5,
            shrink_attempt_limit: None,
        }
    }
}

impl AnnealConfig {
    /// Checks that the temperature schedule terminates.
    ///
    /// # Errors
    ///
    /// [`AnnealConfigError::InitialTemperature`] if `initial_temperature` is
    /// NaN or infinite; [`AnnealConfigError::CoolingRate`] if `cooling_rate`
    /// is NaN, infinite, zero or negative.
    pub fn validate(&self) -> Result<(), AnnealConfigError> {
        if !self.initial_temperature.is_finite() {
            return Err(AnnealConfigError::InitialTemperature {
                value: self.initial_temperature,
            });
        }
        if !(self.cooling_rate.is_finite() && self.cooling_rate > 0.0) {
            return Err(AnnealConfigError::CoolingRate {
                value: self.cooling_rate,
            });
        }
        Ok(())
    }
}

/// An [`AnnealConfig`] whose temperature would never reach zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnealConfigError {
    /// `initial_temperature` is not finite.
    InitialTemperature {
        /// The rejected value.
        value: f64,
    },
    /// `cooling_rate` is not a positive finite number.
    CoolingRate {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for AnnealConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialTemperature { value } => {
                write!(f, "initial temperature must be finite, got {value}")
            }
            Self::CoolingRate { value } => {
                write!(f, "cooling rate must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for AnnealConfigError {}

/// Kind of neighbour proposed in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// A member was dropped from `current`.
    Shrink,
    /// A complement vertex was added to `current`.
    Grow,
}

/// What a single [`Annealer::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The temperature reached zero; the search is over.
    Finished,
    /// The proposal was accepted and applied.
    Accepted {
        /// Proposal kind.
        kind: Move,
        /// The key that left or joined `current`.
        key: String,
    },
    /// The proposal was rejected by the Metropolis test.
    Rejected {
        /// Proposal kind.
        kind: Move,
        /// The key that would have left or joined `current`.
        key: String,
    },
    /// No neighbour exists: no feasible shrink was found and the complement
    /// is empty.
    Idle,
}

/// Counters collected over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnealStats {
    /// Iterations that proposed something or idled (excludes the final
    /// [`StepOutcome::Finished`]).
    pub iterations: u64,
    /// Accepted shrink proposals.
    pub shrinks: u64,
    /// Accepted grow proposals.
    pub grows: u64,
    /// Rejected proposals.
    pub rejected: u64,
    /// Iterations without any proposal.
    pub idle: u64,
    /// Shrink proposals that exhausted their retry limit.
    pub shrink_fallbacks: u64,
    /// Smallest `|current|` observed.
    pub smallest: usize,
}

/// Final state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnealResult {
    /// `current` when the temperature reached zero.
    pub solution: Vec<String>,
    /// Run counters.
    pub stats: AnnealStats,
}

enum Proposal {
    Shrink { index: usize },
    Grow { index: usize },
}

/// Stepwise simulated-annealing search over feasible removal sets.
#[derive(Debug)]
pub struct Annealer<'g, R> {
    oracle: Oracle<'g>,
    config: AnnealConfig,
    rng: R,
    step: u64,
    current: Vec<String>,
    members: HashSet<String>,
    complement: Vec<String>,
    stats: AnnealStats,
}

impl<'g, R: Rng> Annealer<'g, R> {
    /// Starts a search from `initial`, which should be feasible under
    /// `oracle`. Duplicate keys in `initial` are dropped.
    ///
    /// # Errors
    ///
    /// Any [`AnnealConfig::validate`] failure.
    pub fn new(
        oracle: Oracle<'g>,
        initial: &[String],
        config: AnnealConfig,
        rng: R,
    ) -> Result<Self, AnnealConfigError> {
        config.validate()?;

        let mut current = Vec::with_capacity(initial.len());
        let mut members = HashSet::with_capacity(initial.len());
        for key in initial {
            if members.insert(key.clone()) {
                current.push(key.clone());
            }
        }

        let complement: Vec<String> = oracle
            .graph()
            .keys()
            .filter(|k| !members.contains(*k))
            .map(str::to_owned)
            .collect();
        let stats = AnnealStats {
            smallest: current.len(),
            ..AnnealStats::default()
        };

        Ok(Self {
            oracle,
            config,
            rng,
            step: 0,
            current,
            members,
            complement,
            stats,
        })
    }

    /// The working solution.
    pub fn current(&self) -> &[String] {
        &self.current
    }

    /// Vertices not in the working solution, in no particular order.
    pub fn complement(&self) -> &[String] {
        &self.complement
    }

    /// Temperature for the current step count.
    pub fn temperature(&self) -> f64 {
        self.config.initial_temperature - self.step as f64 * self.config.cooling_rate
    }

    /// Counters so far.
    pub fn stats(&self) -> AnnealStats {
        self.stats
    }

    /// Advances the schedule by one iteration.
    pub fn step(&mut self) -> StepOutcome {
        self.step += 1;
        let temperature = self.temperature();
        if temperature <= 0.0 {
            return StepOutcome::Finished;
        }
        self.stats.iterations += 1;

        let Some(proposal) = self.propose() else {
            self.stats.idle += 1;
            return StepOutcome::Idle;
        };

        let next_len = match proposal {
            Proposal::Shrink { .. } => self.current.len() - 1,
            Proposal::Grow { .. } => self.current.len() + 1,
        };
        let delta = self.current.len() as f64 - next_len as f64;
        let accept = delta > 0.0 || self.rng.r#gen::<f64>() <= (delta / temperature).exp();

        let (kind, key) = if accept {
            self.apply(proposal)
        } else {
            self.stats.rejected += 1;
            match proposal {
                Proposal::Shrink { index } => (Move::Shrink, self.current[index].clone()),
                Proposal::Grow { index } => (Move::Grow, self.complement[index].clone()),
            }
        };

        if accept {
            StepOutcome::Accepted { kind, key }
        } else {
            StepOutcome::Rejected { kind, key }
        }
    }

    /// Runs until the temperature reaches zero.
    pub fn run(mut self) -> AnnealResult {
        let start_len = self.current.len();
        while self.step() != StepOutcome::Finished {}

        info!(
            before = start_len,
            after = self.current.len(),
            iterations = self.stats.iterations,
            shrinks = self.stats.shrinks,
            grows = self.stats.grows,
            rejected = self.stats.rejected,
            "annealing finished"
        );
        AnnealResult {
            solution: self.current,
            stats: self.stats,
        }
    }

    fn propose(&mut self) -> Option<Proposal> {
        let weight = self.config.shrink_weight;
        let wants_shrink = self.rng.gen_range(0..=weight) < weight;
        if wants_shrink && !self.current.is_empty() {
            if let Some(index) = self.find_feasible_shrink() {
                return Some(Proposal::Shrink { index });
            }
            self.stats.shrink_fallbacks += 1;
        }
        if self.complement.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.complement.len());
        Some(Proposal::Grow { index })
    }

    fn find_feasible_shrink(&mut self) -> Option<usize> {
        let limit = self
            .config
            .shrink_attempt_limit
            .unwrap_or(self.current.len())
            .max(1);
        for _ in 0..limit {
            let index = self.rng.gen_range(0..self.current.len());
            if self.oracle.is_feasible_without(&self.current, index) {
                return Some(index);
            }
        }
        debug!(
            size = self.current.len(),
            limit, "no feasible shrink found, falling back to grow"
        );
        None
    }

    fn apply(&mut self, proposal: Proposal) -> (Move, String) {
        match proposal {
            Proposal::Shrink { index } => {
                let key = self.current.remove(index);
                self.members.remove(&key);
                self.complement.push(key.clone());
                self.stats.shrinks += 1;
                self.stats.smallest = self.stats.smallest.min(self.current.len());
                (Move::Shrink, key)
            }
            Proposal::Grow { index } => {
                let key = self.complement.swap_remove(index);
                self.members.insert(key.clone());
                self.current.push(key.clone());
                self.stats.grows += 1;
                (Move::Grow, key)
            }
        }
    }
}

/// Runs a full annealing search from `initial` with `rng`.
///
/// # Errors
///
/// Any [`AnnealConfig::validate`] failure; no step runs in that case.
pub fn anneal<R: Rng>(
    oracle: Oracle<'_>,
    initial: &[String],
    config: AnnealConfig,
    rng: R,
) -> Result<AnnealResult, AnnealConfigError> {
    Ok(Annealer::new(oracle, initial, config, rng)?.run())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::oracle::verify;
    use crate::test_helpers::{graph_from_edges, keys};

    fn short_schedule() -> AnnealConfig {
        AnnealConfig {
            initial_temperature: 1.0,
            cooling_rate: 0.001,
            ..AnnealConfig::default()
        }
    }

    #[test]
    fn default_schedule_matches_constants() {
        let c = AnnealConfig::default();
        assert!((c.initial_temperature - 5.0).abs() < f64::EPSILON);
        assert!((c.cooling_rate - 0.0001).abs() < f64::EPSILON);
        assert_eq!(c.shrink_weight, 5);
        assert_eq!(c.shrink_attempt_limit, None);
    }

    #[test]
    fn run_terminates_after_schedule() {
        let g = graph_from_edges(&[("a", "b"), ("b", "a")]);
        let config = AnnealConfig {
            initial_temperature: 1.0,
            cooling_rate: 0.25,
            ..AnnealConfig::default()
        };
        let result = anneal(
            Oracle::new(&g, &[]),
            &keys(&["a"]),
            config,
            StdRng::seed_from_u64(7),
        )
        .expect("valid schedule");
        // T = 1 - step / 4 reaches zero at step 4.
        assert_eq!(result.stats.iterations, 3);
    }

    #[test]
    fn every_intermediate_state_is_feasible() {
        let g = graph_from_edges(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
            ("e", "c"),
            ("f", "a"),
        ]);
        let free = g.free_words();
        let mut annealer = Annealer::new(
            Oracle::new(&g, &free),
            &keys(&["a", "b", "d"]),
            short_schedule(),
            StdRng::seed_from_u64(42),
        )
        .expect("valid schedule");
        loop {
            let outcome = annealer.step();
            assert!(
                verify(&g, annealer.current(), &free),
                "infeasible state {:?}",
                annealer.current()
            );
            if outcome == StepOutcome::Finished {
                break;
            }
        }
    }

    #[test]
    fn complement_mirrors_membership() {
        let g = graph_from_edges(&[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")]);
        let mut annealer = Annealer::new(
            Oracle::new(&g, &[]),
            &keys(&["a", "c"]),
            short_schedule(),
            StdRng::seed_from_u64(3),
        )
        .expect("valid schedule");
        for _ in 0..200 {
            annealer.step();
            let mut all: Vec<String> = annealer
                .current()
                .iter()
                .chain(annealer.complement())
                .cloned()
                .collect();
            all.sort();
            assert_eq!(all, keys(&["a", "b", "c", "d"]));
        }
    }

    #[test]
    fn minimal_solution_does_not_livelock() {
        // `a` is the only feasible single-vertex solution; every shrink fails.
        let g = graph_from_edges(&[("a", "b"), ("b", "a")]);
        let mut annealer = Annealer::new(
            Oracle::new(&g, &[]),
            &keys(&["a"]),
            AnnealConfig {
                shrink_weight: u32::MAX,
                ..short_schedule()
            },
            StdRng::seed_from_u64(11),
        )
        .expect("valid schedule");
        let outcome = annealer.step();
        assert!(matches!(
            outcome,
            StepOutcome::Accepted {
                kind: Move::Grow,
                ..
            } | StepOutcome::Rejected {
                kind: Move::Grow,
                ..
            }
        ));
        assert_eq!(annealer.stats().shrink_fallbacks, 1);
    }

    #[test]
    fn empty_graph_idles() {
        let g = crate::graph::DefinitionGraph::new();
        let mut annealer = Annealer::new(
            Oracle::new(&g, &[]),
            &[],
            short_schedule(),
            StdRng::seed_from_u64(1),
        )
        .expect("valid schedule");
        assert_eq!(annealer.step(), StepOutcome::Idle);
    }

    #[test]
    fn redundant_start_shrinks_to_feasible_solution() {
        let g = graph_from_edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let result = anneal(
            Oracle::new(&g, &[]),
            &keys(&["a", "b", "c"]),
            AnnealConfig::default(),
            StdRng::seed_from_u64(99),
        )
        .expect("valid schedule");
        assert!(verify(&g, &result.solution, &[]));
        assert!(result.stats.smallest >= 1);
        assert!(result.stats.shrinks >= 2);
    }

    #[test]
    fn duplicate_initial_keys_are_collapsed() {
        let g = graph_from_edges(&[("a", "b"), ("b", "a")]);
        let annealer = Annealer::new(
            Oracle::new(&g, &[]),
            &keys(&["a", "a"]),
            short_schedule(),
            StdRng::seed_from_u64(5),
        )
        .expect("valid schedule");
        assert_eq!(annealer.current(), keys(&["a"]).as_slice());
        assert_eq!(annealer.complement(), keys(&["b"]).as_slice());
    }

    fn two_cycle_start(config: AnnealConfig) -> Result<(), AnnealConfigError> {
        let g = graph_from_edges(&[("a", "b"), ("b", "a")]);
        Annealer::new(
            Oracle::new(&g, &[]),
            &keys(&["a"]),
            config,
            StdRng::seed_from_u64(1),
        )
        .map(|_| ())
    }

    #[test]
    fn zero_cooling_rate_is_rejected() {
        let err = two_cycle_start(AnnealConfig {
            cooling_rate: 0.0,
            ..AnnealConfig::default()
        })
        .expect_err("schedule never ends");
        assert_eq!(err, AnnealConfigError::CoolingRate { value: 0.0 });
    }

    #[test]
    fn negative_cooling_rate_is_rejected() {
        let err = two_cycle_start(AnnealConfig {
            cooling_rate: -0.5,
            ..AnnealConfig::default()
        })
        .expect_err("temperature rises forever");
        assert_eq!(err, AnnealConfigError::CoolingRate { value: -0.5 });
    }

    #[test]
    fn non_finite_cooling_rate_is_rejected() {
        for value in [f64::NAN, f64::INFINITY] {
            let err = two_cycle_start(AnnealConfig {
                cooling_rate: value,
                ..AnnealConfig::default()
            })
            .expect_err("not a usable rate");
            assert!(matches!(err, AnnealConfigError::CoolingRate { .. }));
        }
    }

    #[test]
    fn non_finite_initial_temperature_is_rejected() {
        for value in [f64::NAN, f64::INFINITY] {
            let err = two_cycle_start(AnnealConfig {
                initial_temperature: value,
                ..AnnealConfig::default()
            })
            .expect_err("temperature never reaches zero");
            assert!(matches!(err, AnnealConfigError::InitialTemperature { .. }));
        }
    }

    #[test]
    fn non_positive_initial_temperature_finishes_at_once() {
        let g = graph_from_edges(&[("a", "b"), ("b", "a")]);
        let config = AnnealConfig {
            initial_temperature: 0.0,
            ..AnnealConfig::default()
        };
        let result = anneal(
            Oracle::new(&g, &[]),
            &keys(&["a"]),
            config,
            StdRng::seed_from_u64(1),
        )
        .expect("finite schedule");
        assert_eq!(result.stats.iterations, 0);
        assert_eq!(result.solution, keys(&["a"]));
    }

    #[test]
    fn config_error_message_names_the_value() {
        let msg = AnnealConfigError::CoolingRate { value: -2.0 }.to_string();
        assert!(msg.contains("cooling rate"), "message: {msg}");
        assert!(msg.contains("-2"), "message: {msg}");
    }
}
