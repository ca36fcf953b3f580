//! Harness configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal harness.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Interpret typed cell numbers as 1-9 rather than 0-8.
    #[serde(default = "default_one_based_input")]
    one_based_input: bool,

    /// Show cell numbers in empty squares.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_one_based_input() -> bool {
    true
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            one_based_input: default_one_based_input(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
