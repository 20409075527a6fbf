//! Generates synthetic benchmark dictionaries to disk.
//!
//! Usage: `gen-dict [TIER] [SEED]`, where TIER is one of small, medium,
//! large, xlarge or all (default: all) and SEED defaults to 42. Files are
//! written to `target/bench-fixtures/<tier>.dict.json`.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use lexfvs_bench::{SizeTier, fixture_path, fixtures_dir, generate_dictionary};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let tier_arg = args.next().unwrap_or_else(|| "all".to_owned());
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };

    let tiers: Vec<SizeTier> = if tier_arg == "all" {
        SizeTier::ALL.to_vec()
    } else {
        let tier = SizeTier::from_name(&tier_arg)
            .ok_or_else(|| format!("unknown tier {tier_arg:?}"))?;
        vec![tier]
    };

    fs::create_dir_all(fixtures_dir())?;
    for tier in tiers {
        let path = fixture_path(tier);
        eprintln!("Generating {} tier (seed {seed})...", tier.name());
        let dict = generate_dictionary(&tier.config(seed));

        let out = fs::File::create(&path)?;
        serde_json::to_writer(BufWriter::new(out), &dict)?;

        let size = fs::metadata(&path)?.len();
        eprintln!(
            "Wrote {} headwords to {} ({:.1} MB)",
            dict.len(),
            path.display(),
            size as f64 / (1024.0 * 1024.0)
        );
    }
    Ok(())
}
