//! Runtime configuration from environment variables.
//!
//! | Variable             | Default | Meaning                                  |
//! |----------------------|---------|------------------------------------------|
//! | `PWD_TICK_MS`        | `80`    | Render tick interval, must be > 0        |
//! | `PWD_CONFIRM_MS`     | `800`   | Pause after Enter shows the final rating |
//! | `PWD_BLACKLIST_PATH` | unset   | Extra common passwords, one per line     |
//! | `PWD_CLIPBOARD`      | on      | `0`, `false`, `off`, `no` disable copy   |
//! | `PWD_LOG_FILE`       | unset   | Write logs to this file                  |

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TICK_MS: u64 = 80;
pub const DEFAULT_CONFIRM_MS: u64 = 800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick: Duration,
    pub confirm_pause: Duration,
    pub blacklist_path: Option<PathBuf>,
    pub clipboard: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            confirm_pause: Duration::from_millis(DEFAULT_CONFIRM_MS),
            blacklist_path: None,
            clipboard: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PWD_TICK_MS") {
            config.tick = parse_millis("PWD_TICK_MS", &value, false)?;
        }
        if let Some(value) = lookup("PWD_CONFIRM_MS") {
            config.confirm_pause = parse_millis("PWD_CONFIRM_MS", &value, true)?;
        }
        config.blacklist_path = lookup("PWD_BLACKLIST_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        if let Some(value) = lookup("PWD_CLIPBOARD") {
            config.clipboard = parse_switch("PWD_CLIPBOARD", &value)?;
        }
        config.log_file = lookup("PWD_LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_millis(key: &'static str, value: &str, allow_zero: bool) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) if !allow_zero => Err(invalid(key, value)),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(_) => Err(invalid(key, value)),
    }
}

fn parse_switch(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}
