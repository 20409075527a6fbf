/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `lexfvs` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read or parse the
///   input at all. These errors terminate early before any graph work runs.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   removal set does not break every cycle.
use std::fmt;
use std::path::PathBuf;

use lexfvs_core::{AnnealConfigError, DictionaryError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `lexfvs` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A dictionary or key list could not be parsed.
    ParseFailed {
        /// A human-readable label for the source.
        source: String,
        /// Parser message, including line and column.
        detail: String,
    },

    /// More than one input argument was `-`.
    MultipleStdin,

    /// Annealing flags describe a temperature schedule that never ends.
    InvalidSchedule {
        /// Why the schedule was rejected.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The removal set leaves at least one definition cycle intact.
    ///
    /// The verdict has already been printed; this variant exists so `main`
    /// can exit with code 1.
    Infeasible {
        /// Number of words in the rejected removal set.
        removal_size: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::MultipleStdin
            | Self::InvalidSchedule { .. } => 2,

            Self::Infeasible { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { source, detail } => {
                format!("error: failed to parse {source}: {detail}")
            }
            Self::MultipleStdin => {
                "error: at most one input may be read from stdin ('-')".to_owned()
            }
            Self::InvalidSchedule { detail } => {
                format!("error: invalid annealing schedule: {detail}")
            }
            Self::Infeasible { removal_size } => {
                format!("error: removal set of {removal_size} words leaves a definition cycle")
            }
        }
    }

    /// Wraps a core parse error with the label of the input it came from.
    pub fn parse(source: &str, err: &DictionaryError) -> Self {
        Self::ParseFailed {
            source: source.to_owned(),
            detail: err.to_string(),
        }
    }
}

impl From<AnnealConfigError> for CliError {
    fn from(err: AnnealConfigError) -> Self {
        Self::InvalidSchedule {
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
