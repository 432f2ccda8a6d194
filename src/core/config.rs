//! # Configuration
//!
//! Environment-driven settings for the reminder tracker. The binary loads
//! a `.env` file (if present) before calling [`Config::from_env`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// Environment key for the reminder file location
pub const REMINDERS_FILE_VAR: &str = "REMINDERS_FILE";

/// Environment key for the default log filter
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub const DEFAULT_REMINDERS_FILE: &str = "reminders.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File the reminder store reads and rewrites
    pub reminders_path: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reminders_path: PathBuf::from(DEFAULT_REMINDERS_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let reminders_path = match lookup(REMINDERS_FILE_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(anyhow!("{REMINDERS_FILE_VAR} is set but empty"));
            }
            Some(value) => PathBuf::from(value.trim()),
            None => defaults.reminders_path,
        };

        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Config {
            reminders_path,
            log_level,
        })
    }
}
