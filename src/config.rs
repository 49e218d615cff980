use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Maximum number of lots a match query returns
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Status tag that marks a lot as eligible, compared case-insensitively
    #[serde(default = "default_available_status")]
    pub available_status: String,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            available_status: default_available_status(),
        }
    }
}

fn default_result_limit() -> usize { 5 }
fn default_available_status() -> String { "available".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FOODMATCH_)
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOODMATCH__MATCHING__RESULT_LIMIT -> matching.result_limit
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("FOODMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
