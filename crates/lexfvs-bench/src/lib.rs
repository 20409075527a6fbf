//! Dictionary generator and benchmark utilities for lexfvs.
//!
//! This crate provides deterministic generation of synthetic cleaned
//! dictionaries for benchmarking and property-based testing of
//! `lexfvs-core`, plus checkers that validate results independently of the
//! crate's own oracles.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_dictionary};

/// Returns the directory where `gen-dict` stores generated dictionaries.
///
/// The files live under `target/bench-fixtures/` so they are gitignored and
/// shared between the generator binary and the benchmark harness.
pub fn fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}

/// Path of the generated dictionary for `tier`.
pub fn fixture_path(tier: SizeTier) -> PathBuf {
    fixtures_dir().join(format!("{}.dict.json", tier.name()))
}
