//! Stderr logging for the `lexfvs` binary.
//!
//! The core emits `tracing` events; this module installs the `fmt`
//! subscriber that renders them. `RUST_LOG` wins over the level implied by
//! `--quiet` / `--verbose` whenever it is set and valid.
use tracing_subscriber::EnvFilter;

/// Filter directive implied by the verbosity flags.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Builds the filter: `RUST_LOG` if it parses, otherwise the flag default.
pub fn env_filter(quiet: bool, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)))
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(quiet: bool, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_logs_errors_only() {
        assert_eq!(default_directive(true, false), "error");
    }

    #[test]
    fn verbose_logs_debug() {
        assert_eq!(default_directive(false, true), "debug");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(default_directive(false, false), "info");
    }
}
