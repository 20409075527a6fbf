mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use cli::{Cli, Command, OutputFormat, PathOrStdin, VerifyMethod};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    debug!(version = lexfvs_core::version(), "lexfvs starting");

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2))
        }
    }
}

/// Reads the inputs named on the command line and runs the subcommand.
fn dispatch(cli: Cli) -> Result<(), CliError> {
    let max = cli.max_file_size;
    let compact = cli.compact;

    match cli.command {
        Command::FreeWords { dict } => {
            cmd::free_words::run(io::read_dictionary(&dict, max)?, compact)
        }
        Command::Solve { dict } => cmd::solve::run(io::read_dictionary(&dict, max)?, compact),
        Command::Verify {
            dict,
            removal,
            method,
        } => {
            io::ensure_single_stdin([&dict, &removal])?;
            let d = io::read_dictionary(&dict, max)?;
            let r = io::read_key_list(&removal, max)?;
            cmd::verify::run(d, &r, method, &cli.format, compact)
        }
        Command::Cull {
            dict,
            removal,
            fixpoint,
        } => {
            io::ensure_single_stdin([&dict, &removal])?;
            let d = io::read_dictionary(&dict, max)?;
            let r = io::read_key_list(&removal, max)?;
            cmd::cull::run(d, &r, fixpoint, compact)
        }
        Command::Anneal {
            dict,
            removal,
            seed,
            initial_temperature,
            cooling_rate,
            shrink_weight,
            shrink_attempts,
        } => {
            io::ensure_single_stdin([&dict, &removal])?;
            let d = io::read_dictionary(&dict, max)?;
            let r = io::read_key_list(&removal, max)?;
            let args = cmd::anneal::AnnealArgs {
                seed,
                initial_temperature,
                cooling_rate,
                shrink_weight,
                shrink_attempts,
            };
            cmd::anneal::run(d, &r, &args, compact)
        }
        Command::Inspect { dict } => {
            cmd::inspect::run(io::read_dictionary(&dict, max)?, &cli.format, compact)
        }
        Command::Export { dict, removal } => {
            io::ensure_single_stdin(std::iter::once(&dict).chain(removal.as_ref()))?;
            let d = io::read_dictionary(&dict, max)?;
            let r = match &removal {
                Some(source) => io::read_key_list(source, max)?,
                None => Vec::new(),
            };
            cmd::export::run(d, &r, compact)
        }
    }
}
