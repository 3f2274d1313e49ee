//! CLI command implementations
//!
//! Commands construct the store explicitly and hand it to the server;
//! nothing is process-global.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{AppState, HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::{FileStore, StringStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure.
///
/// Every field has a default, and a missing config file means
/// all-defaults, so `stringdb start` works out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Host the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_data_path() -> String {
    "./stringdb-data.json".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file; a missing file yields defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_path.is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        Ok(())
    }

    fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
        Command::Reset { config, yes } => reset(&config, yes),
    }
}

/// Create an empty data file; refuses when one already exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_path = Path::new(&config.data_path);

    if data_path.exists() {
        return Err(CliError::already_initialized());
    }

    FileStore::create(data_path).map_err(|e| CliError::data_error(e.to_string()))?;
    println!("Created data file at {}", config.data_path);
    Ok(())
}

/// Open the store and serve HTTP until shutdown.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store =
        FileStore::open(&config.data_path).map_err(|e| CliError::boot_failed(e.to_string()))?;
    let state = Arc::new(AppState::new(Arc::new(store)));
    let server = HttpServer::new(state, config.http_config());

    Logger::info(
        "boot",
        &[("data_path", &config.data_path), ("addr", &server.socket_addr())],
    );

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::boot_failed(e.to_string()))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Open the data file and report the record count.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_path = Path::new(&config.data_path);

    if !data_path.exists() {
        return Err(CliError::not_initialized());
    }

    let store = FileStore::open(data_path).map_err(|e| CliError::data_error(e.to_string()))?;
    let count = store.count().map_err(|e| CliError::data_error(e.to_string()))?;
    println!("Data file OK: {} record(s)", count);
    Ok(())
}

/// Replace the data file with an empty one. Destructive; needs --yes.
pub fn reset(config_path: &Path, yes: bool) -> CliResult<()> {
    if !yes {
        return Err(CliError::refused(
            "reset deletes all stored records; pass --yes to confirm",
        ));
    }

    let config = Config::load(config_path)?;
    let data_path = Path::new(&config.data_path);

    if data_path.exists() {
        fs::remove_file(data_path)?;
    }
    FileStore::create(data_path).map_err(|e| CliError::data_error(e.to_string()))?;

    Logger::warn("data_reset", &[("data_path", &config.data_path)]);
    println!("Reset data file at {}", config.data_path);
    Ok(())
}
