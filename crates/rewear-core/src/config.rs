// Rust guideline compliant 2026-02-06

//! Configuration management for ReWear.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Configuration for ReWear behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSONL catalog snapshot.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Minimum log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file receiving JSON logs instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,

    /// Catalog size at which filtering switches to rayon.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_catalog_path() -> String {
    "catalog.jsonl".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_parallel_threshold() -> usize {
    crate::search::DEFAULT_PARALLEL_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            log_file: None,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `config.toml` inside `config_dir`
    /// 3. Environment variables with `REWEAR_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `config.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config.log_level = config.log_level.to_lowercase();
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `REWEAR_CATALOG_PATH` - Catalog JSONL path
    /// - `REWEAR_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `REWEAR_LOG_LEVEL` - Minimum log level
    /// - `REWEAR_LOG_FILE` - JSON log file path
    /// - `REWEAR_PARALLEL_THRESHOLD` - Parallel filtering threshold
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("REWEAR_CATALOG_PATH") {
            self.catalog_path = val;
        }

        if let Ok(val) = std::env::var("REWEAR_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "REWEAR_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("REWEAR_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("REWEAR_LOG_FILE") {
            self.log_file = Some(val);
        }

        if let Ok(val) = std::env::var("REWEAR_PARALLEL_THRESHOLD") {
            self.parallel_threshold = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "REWEAR_PARALLEL_THRESHOLD must be a positive number".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - catalog_path is empty
    /// - log_level is not a known level
    /// - parallel_threshold is zero
    fn validate(&self) -> Result<()> {
        if self.catalog_path.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "catalog_path cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory to write `config.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
