/// Stdout rendering for command results.
///
/// Word lists are always written as a JSON array, the same format the
/// commands read back, so `solve`, `cull` and `anneal` can be chained
/// through files. Report commands (`verify`, `inspect`) honour
/// `--format`: aligned `key: value` lines for humans, a single JSON object
/// otherwise. `--compact` switches JSON output from pretty to minified.
use std::io::Write;

use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

/// A report rendered as aligned lines or as one JSON object.
pub trait Report: Serialize {
    /// Writes the human-readable form.
    fn write_human<W: Write>(&self, w: &mut W) -> std::io::Result<()>;
}

/// Serializes `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    w: &mut W,
    value: &T,
    compact: bool,
) -> std::io::Result<()> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Writes a report in the requested format.
pub fn write_report<W: Write, R: Report>(
    w: &mut W,
    report: &R,
    format: &OutputFormat,
    compact: bool,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => report.write_human(w),
        OutputFormat::Json => write_json(w, report, compact),
    }
}

/// Writes a word list to stdout.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn print_keys(keys: &[String], compact: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, keys, compact).map_err(stdout_error)
}

/// Writes a report to stdout.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn print_report<R: Report>(
    report: &R,
    format: &OutputFormat,
    compact: bool,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format, compact).map_err(stdout_error)
}

/// Maps a stdout write failure to a [`CliError`].
pub fn stdout_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
