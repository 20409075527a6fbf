//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Returns `true` for the stdin sentinel.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for report commands (`verify`, `inspect`).
///
/// Commands that produce word lists always print a JSON array, since that
/// array is the file other commands read back.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `key: value` lines (default).
    Human,
    /// A single JSON object.
    Json,
}

/// Feasibility test used by `verify`.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum VerifyMethod {
    /// Depth-first search for a back edge (default).
    #[default]
    Dfs,
    /// Delete the removal set, then strip zero in-degree words.
    Cascade,
}

/// All top-level subcommands exposed by the `lexfvs` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List the free words: words whose definition uses no other word.
    #[command(name = "free-words")]
    FreeWords {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
    },

    /// Compute a removal set with the greedy constructor.
    Solve {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
    },

    /// Check that a removal set breaks every definition cycle.
    ///
    /// Exits with code 1 when the set is infeasible.
    Verify {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
        /// JSON array of words to remove (cannot be `-` if DICT is `-`).
        #[arg(value_name = "REMOVAL")]
        removal: PathOrStdin,
        /// Feasibility test: dfs (default) or cascade.
        #[arg(long, default_value = "dfs", value_enum)]
        method: VerifyMethod,
    },

    /// Drop redundant words from a removal set.
    Cull {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
        /// JSON array of words to remove (cannot be `-` if DICT is `-`).
        #[arg(value_name = "REMOVAL")]
        removal: PathOrStdin,
        /// Repeat passes until one drops nothing.
        #[arg(long)]
        fixpoint: bool,
    },

    /// Refine a removal set with simulated annealing.
    Anneal {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
        /// JSON array of words to remove (cannot be `-` if DICT is `-`).
        #[arg(value_name = "REMOVAL")]
        removal: PathOrStdin,
        /// Seed for the random number generator.
        ///
        /// Can also be set via the `LEXFVS_SEED` environment variable. A
        /// random seed is drawn and logged when neither is given.
        #[arg(long, env = "LEXFVS_SEED")]
        seed: Option<u64>,
        /// Starting temperature (default: 5.0).
        #[arg(long, default_value = "5.0")]
        initial_temperature: f64,
        /// Temperature decrease per iteration (default: 0.0001).
        ///
        /// Must be positive and finite, or the run is rejected.
        #[arg(long, default_value = "0.0001")]
        cooling_rate: f64,
        /// Weight of shrink proposals against a grow weight of 1 (default: 5).
        #[arg(long, default_value = "5")]
        shrink_weight: u32,
        /// Random draws per shrink proposal before falling back to grow.
        ///
        /// Defaults to the current size of the removal set.
        #[arg(long)]
        shrink_attempts: Option<usize>,
    },

    /// Print vertex, edge, free-word and cycle statistics for a dictionary.
    Inspect {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
    },

    /// Export the definition graph as node-link JSON.
    Export {
        /// Path to a cleaned dictionary JSON file, or `-` for stdin.
        #[arg(value_name = "DICT")]
        dict: PathOrStdin,
        /// Delete the words in this JSON array before exporting.
        #[arg(long, value_name = "FILE")]
        removal: Option<PathOrStdin>,
    },
}

/// Root CLI struct for the `lexfvs` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "lexfvs",
    version,
    about = "Primitive word sets for dictionary definition graphs",
    long_about = "Computes feedback vertex sets over dictionary definition graphs.\n\
                  Lists free words, builds a greedy removal set, verifies it,\n\
                  and refines it by culling or simulated annealing."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Report format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-pass detail to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `LEXFVS_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "LEXFVS_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Emit minified JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    pub compact: bool,
}
