/*!
 * Application configuration module.
 *
 * Handles the application configuration including loading, validating and
 * merging configuration settings from an optional config file, command-line
 * flags and the environment.
 */

use anyhow::{Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;
use crate::providers::openai::DEFAULT_ENDPOINT;

/// Environment variable consulted when no API key is given explicitly
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code (ISO or locale form, e.g. "es", "zh-CN")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Model name to use for translation
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (may be empty; the environment is consulted as fallback)
    #[serde(default)]
    pub api_key: String,

    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Extra known-bad provider outputs, merged with the built-in set
    #[serde(default)]
    pub known_bad_outputs: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_target_language() -> String {
    "zh-CN".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            known_bad_outputs: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}

/// Resolve the effective API key from the explicit value and the environment
///
/// The explicit value wins; an empty explicit value falls back to the
/// environment. A missing credential is a fatal precondition failure.
pub fn resolve_api_key(explicit: &str, env_value: Option<String>) -> Result<String> {
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }
    match env_value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(anyhow!(
            "No API key provided (use --api-key or set the {} environment variable)",
            API_KEY_ENV_VAR
        )),
    }
}

impl Config {
    /// Validate the configuration and resolve the credential
    ///
    /// Must be called before the pass begins; a missing credential aborts
    /// here rather than mid-file.
    pub fn validate(&mut self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language must not be empty"));
        }
        if !language_utils::is_known_language_code(&self.target_language) {
            // Tolerated: catalogs in the wild use private-use codes
            warn!(
                "Target language '{}' is not a recognized ISO 639 code, passing it through as-is",
                self.target_language
            );
        }

        if self.model.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(anyhow!("Endpoint URL must not be empty"));
        }

        self.api_key = resolve_api_key(&self.api_key, std::env::var(API_KEY_ENV_VAR).ok())?;
        Ok(())
    }
}
