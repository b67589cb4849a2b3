//! Simulation settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThreesConfig {
    /// Width and height of the grid.
    #[serde(default = "default_size")]
    size: usize,

    /// Seed for tile draws and direction choice. Random if absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Upper bound on committed turns.
    #[serde(default = "default_max_turns")]
    max_turns: usize,
}

#[instrument]
fn default_size() -> usize {
    4
}

#[instrument]
fn default_max_turns() -> usize {
    500
}

impl Default for ThreesConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
            max_turns: default_max_turns(),
        }
    }
}

impl ThreesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, max_turns = config.max_turns, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces settings with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        seed: Option<u64>,
        max_turns: Option<usize>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(max_turns) = max_turns {
            self.max_turns = max_turns;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
