//! CLI module for stringdb
//!
//! Provides command-line interface for:
//! - init: Create the data file
//! - start: Boot the store and serve HTTP
//! - check: Verify the data file and report the record count
//! - reset: Replace the data file with an empty one (needs --yes)

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, init, reset, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
