//! Synthetic dictionary generator.
//!
//! Produces [`Dictionary`] instances shaped like cleaned real dictionaries:
//! a pool of primitive words with no definition, and headwords whose
//! definitions mostly use primitives or earlier headwords. A configurable
//! fraction of definition words point forward to later headwords instead,
//! which is what creates definition cycles.

pub mod words;

use lexfvs_core::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use words::word_name;

/// Configuration for the dictionary generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of words with a definition.
    pub num_headwords: usize,
    /// Number of words that only ever appear inside definitions.
    pub num_primitives: usize,
    /// Shortest definition, in words.
    pub min_definition_len: usize,
    /// Longest definition, in words.
    pub max_definition_len: usize,
    /// Probability that a definition word refers to a later headword
    /// (0.0 = acyclic).
    pub forward_reference_rate: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~250 words, ~1K edges
    Small,
    /// ~2.4K words, ~13K edges
    Medium,
    /// ~23K words, ~150K edges
    Large,
    /// ~90K words, ~700K edges
    XLarge,
}

impl SizeTier {
    /// Every tier, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Short lowercase name, as accepted by `gen-dict`.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::XLarge => "xlarge",
        }
    }

    /// Parses a tier name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_headwords: 200,
                num_primitives: 50,
                min_definition_len: 2,
                max_definition_len: 8,
                forward_reference_rate: 0.1,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_headwords: 2_000,
                num_primitives: 400,
                min_definition_len: 3,
                max_definition_len: 10,
                forward_reference_rate: 0.1,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_headwords: 20_000,
                num_primitives: 3_000,
                min_definition_len: 3,
                max_definition_len: 12,
                forward_reference_rate: 0.08,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                num_headwords: 80_000,
                num_primitives: 10_000,
                min_definition_len: 4,
                max_definition_len: 14,
                forward_reference_rate: 0.06,
            },
        }
    }
}

/// Generates a dictionary from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Word `i` is
/// a primitive for `i < num_primitives` and a headword otherwise. A headword
/// never mentions itself.
pub fn generate_dictionary(config: &GeneratorConfig) -> Dictionary {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut dict = Dictionary::new();
    let total = config.num_primitives + config.num_headwords;
    let max_len = config.max_definition_len.max(config.min_definition_len);
    let rate = config.forward_reference_rate.clamp(0.0, 1.0);

    for index in config.num_primitives..total {
        let len = rng.gen_range(config.min_definition_len..=max_len);
        let mut definition = Vec::with_capacity(len);
        for _ in 0..len {
            let forward = index + 1 < total && rng.gen_bool(rate);
            if forward {
                definition.push(word_name(rng.gen_range(index + 1..total)));
            } else if index > 0 {
                definition.push(word_name(rng.gen_range(0..index)));
            }
        }
        dict.insert(word_name(index), definition);
    }
    dict
}
