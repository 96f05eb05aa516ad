//! Configuration types for the converter

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::history::DEFAULT_HISTORY_FILE;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConverterConfig {
    /// History log configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Diagnostics configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// History log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// History file path
    #[serde(default = "default_history_path")]
    pub path: PathBuf,

    /// Ask before clearing the history
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

fn default_history_path() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

fn default_confirm() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            confirm: default_confirm(),
        }
    }
}

/// Diagnostics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Builder for ConverterConfig
pub struct ConfigBuilder {
    config: ConverterConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
        }
    }

    /// Set the history file path
    pub fn history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.history.path = path.into();
        self
    }

    /// Set whether clearing asks for confirmation
    pub fn confirm_clear(mut self, confirm: bool) -> Self {
        self.config.history.confirm = confirm;
        self
    }

    /// Set the default log filter
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log.level = level.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConverterConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Loads in this order:
    /// 1. Default configuration
    /// 2. Configuration file (unitconv.toml, then the path in UNITCONV_CONFIG_PATH)
    /// 3. Environment variable overrides (UNITCONV_HISTORY_PATH, UNITCONV_LOG_LEVEL, ...)
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is invalid.
    pub fn load() -> crate::error::Result<Self> {
        use figment::{
            Figment,
            providers::{Env, Format, Serialized, Toml},
        };

        let mut figment = Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Toml::file("unitconv.toml"));

        // Check for custom config path
        if let Ok(path) = std::env::var("UNITCONV_CONFIG_PATH") {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed("UNITCONV_")
                .ignore(&["CONFIG_PATH"])
                .split("_"),
        );

        let config: ConverterConfig = figment.extract().map_err(|e| {
            crate::error::ConvertError::Configuration(format!(
                "Failed to load configuration: {}",
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        use figment::{
            Figment,
            providers::{Format, Serialized, Toml},
        };

        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::error::ConvertError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: ConverterConfig = Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| {
                crate::error::ConvertError::Configuration(format!(
                    "Failed to load configuration file: {}",
                    e
                ))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the history path or log level is empty.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.history.path.as_os_str().is_empty() {
            return Err(crate::error::ConvertError::Configuration(
                "history.path must not be empty".to_string(),
            ));
        }
        if self.log.level.trim().is_empty() {
            return Err(crate::error::ConvertError::Configuration(
                "log.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
