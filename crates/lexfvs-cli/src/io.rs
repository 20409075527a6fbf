/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for all input I/O in the `lexfvs`
/// binary. `lexfvs-core` never touches the filesystem; all reading happens
/// here, and parsed dictionaries and key lists are handed to the core.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded, and
///   accepted for at most one argument per invocation.
/// - All I/O and parse errors become [`CliError`] variants with exit code 2.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use lexfvs_core::{Dictionary, parse_key_list};
use tracing::debug;

use crate::PathOrStdin;
use crate::error::CliError;

/// Human-readable label for an input: the path, or `-` for stdin.
pub fn source_label(source: &PathOrStdin) -> String {
    match source {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

/// Rejects argument lists where more than one input is `-`.
///
/// # Errors
///
/// [`CliError::MultipleStdin`] if two or more sources are stdin.
pub fn ensure_single_stdin<'a>(
    sources: impl IntoIterator<Item = &'a PathOrStdin>,
) -> Result<(), CliError> {
    if sources.into_iter().filter(|s| s.is_stdin()).count() > 1 {
        return Err(CliError::MultipleStdin);
    }
    Ok(())
}

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) when the input is missing, unreadable,
/// larger than `max_size`, or not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let content = match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }?;
    debug!(source = %source_label(source), bytes = content.len(), "input read");
    Ok(content)
}

/// Reads and parses a cleaned dictionary.
///
/// # Errors
///
/// Any [`read_input`] error, or [`CliError::ParseFailed`].
pub fn read_dictionary(source: &PathOrStdin, max_size: u64) -> Result<Dictionary, CliError> {
    let content = read_input(source, max_size)?;
    Dictionary::from_json(&content).map_err(|e| CliError::parse(&source_label(source), &e))
}

/// Reads and parses a JSON array of words.
///
/// # Errors
///
/// Any [`read_input`] error, or [`CliError::ParseFailed`].
pub fn read_key_list(source: &PathOrStdin, max_size: u64) -> Result<Vec<String>, CliError> {
    let content = read_input(source, max_size)?;
    parse_key_list(&content).map_err(|e| CliError::parse(&source_label(source), &e))
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads stdin, capped at `max_size` bytes. A stream of exactly `max_size`
/// bytes is probed for one more byte to tell "at the limit" from "over".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    let mut buf: Vec<u8> = Vec::new();

    handle
        .by_ref()
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
