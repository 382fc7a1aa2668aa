//! Client configuration
//!
//! Small TOML-loadable config for the document service endpoint.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the document service.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults; unknown keys are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str::<Config>(&content)?;
        log::debug!(
            "loaded config from {}: api_base={}",
            path.as_ref().display(),
            config.api_base
        );
        Ok(config)
    }
}
