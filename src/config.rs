//! Configuration management
//!
//! Settings are read once at start-up from the first file that exists:
//!
//! 1. `./.spesa.toml` (project)
//! 2. `~/.spesa/config.toml` (global)
//!
//! Missing files fall back to built-in defaults. A `--file` flag on the
//! command line overrides `storage.file` from either file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::csv::DEFAULT_FILE;
use crate::shell::ShellOptions;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".spesa.toml";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".spesa";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// spesa configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where and how the list is persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the CSV file
    pub file: PathBuf,
    /// Overwrite the file with an empty list when the list is cleared
    pub reset_file_on_clear: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            reset_file_on_clear: true,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "€".to_string(),
        }
    }
}

/// Get the global config file path (`~/.spesa/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(GLOBAL_DIR)
        .join(GLOBAL_CONFIG_FILE)
}

impl Config {
    /// Load from the project file, else the global file, else defaults
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_first(&[PathBuf::from(PROJECT_CONFIG), global_config()])
    }

    /// Load the first existing file among `candidates`
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it exists but cannot be read or parsed.
    pub fn load_first(candidates: &[PathBuf]) -> anyhow::Result<Self> {
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load one config file
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the list file when one was given on the command line
    #[must_use]
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.storage.file = file;
        }
        self
    }

    /// Session options for the interactive shell
    #[must_use]
    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            currency: self.display.currency.clone(),
            reset_file_on_clear: self.storage.reset_file_on_clear,
        }
    }
}
