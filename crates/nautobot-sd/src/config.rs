//! Configuration loading and types

use std::path::{Path, PathBuf};

use eyre::WrapErr;
use nautobot_sd_core::QueryConfig;
use serde::{Deserialize, Serialize};

/// Environment variable pointing at the config file
pub const CONFIG_ENV: &str = "NAUTOBOT_SD_CONFIG";

/// Top-level configuration for the nautobot-sd daemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Daemon server settings
    #[serde(default)]
    pub daemon: DaemonConfig,
    /// Query document settings
    #[serde(default)]
    pub queries: QueryConfig,
}

/// Daemon server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address and port to bind to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:6645".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid configuration
    pub fn parse(content: &str) -> eyre::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Locate the config file to use, if any
    ///
    /// `NAUTOBOT_SD_CONFIG` wins; otherwise the first existing file of
    /// `./nautobot-sd.toml`, `/etc/nautobot-sd/nautobot-sd.toml` and the user
    /// config directory is used.
    pub fn discover() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut paths = vec![
            PathBuf::from("nautobot-sd.toml"),
            PathBuf::from("/etc/nautobot-sd/nautobot-sd.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("nautobot-sd/nautobot-sd.toml"));
        }

        paths.into_iter().find(|path| path.exists())
    }

    /// Load from the discovered path or fall back to defaults
    ///
    /// Returns the path that was loaded alongside the config.
    ///
    /// # Errors
    /// Returns error if a discovered file cannot be read or parsed
    pub fn load_default() -> eyre::Result<(Self, Option<PathBuf>)> {
        match Self::discover() {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Config::default(), None)),
        }
    }
}
