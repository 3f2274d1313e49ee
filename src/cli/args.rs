//! CLI argument definitions using clap
//!
//! Commands:
//! - stringdb init --config <path>
//! - stringdb start --config <path>
//! - stringdb check --config <path>
//! - stringdb reset --config <path> --yes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stringdb - A small string analysis and retrieval service
#[derive(Parser, Debug)]
#[command(name = "stringdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./stringdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./stringdb.json")]
        config: PathBuf,
    },

    /// Verify the data file opens and report the record count
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./stringdb.json")]
        config: PathBuf,
    },

    /// Delete all stored records and recreate an empty data file
    Reset {
        /// Path to configuration file
        #[arg(long, default_value = "./stringdb.json")]
        config: PathBuf,

        /// Confirm the reset; refused without it
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
