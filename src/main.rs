//! stringdb CLI entry point
//!
//! Parses arguments, dispatches to CLI commands, prints errors to stderr
//! and exits non-zero on failure. All logic lives in the CLI module.

use stringdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
