//! Project configuration.
//!
//! An optional `.edotenv.toml` in the working directory supplies default
//! paths so they don't have to be repeated on every command:
//!
//! ```toml
//! key_path = "../secrets/.env.key"
//! dotenv_path = ".env"
//! edotenv_path = ".env.encrypted"
//! ```
//!
//! Command-line arguments and `EDOTENV_KEY_PATH` take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Defaults read from `.edotenv.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Key file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<PathBuf>,
    /// Plaintext .env path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dotenv_path: Option<PathBuf>,
    /// Encrypted .env path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edotenv_path: Option<PathBuf>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.edotenv.toml` from the current directory.
    ///
    /// A missing file yields the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or has unknown
    /// fields.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Key path: explicit value first, then the config file.
    pub fn key_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.key_path.clone())
    }

    /// Plaintext .env path: explicit value, config file, then `.env`.
    pub fn dotenv_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.dotenv_path.clone())
            .unwrap_or_else(|| PathBuf::from(constants::ENV_FILE))
    }

    /// Encrypted .env path: explicit value, config file, then `.env`.
    pub fn edotenv_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.edotenv_path.clone())
            .unwrap_or_else(|| PathBuf::from(constants::ENV_FILE))
    }
}
