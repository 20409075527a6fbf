/// Command modules for the `lexfvs` CLI.
///
/// Each submodule implements one subcommand. Inputs are read and parsed by
/// `main`; the `run` function in each module receives the parsed dictionary
/// (and removal set, where the command takes one) and returns `Ok(())` on
/// success or a [`crate::error::CliError`] on failure.
pub mod anneal;
pub mod cull;
pub mod export;
pub mod free_words;
pub mod inspect;
pub mod solve;
pub mod verify;
