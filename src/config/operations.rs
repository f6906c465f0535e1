//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::completion::HttpClientConfig;
use crate::error::{PromptcraftError, Result};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `model`.
pub const MODEL_ENV: &str = "PROMPTCRAFT_MODEL";

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "PROMPTCRAFT_BASE_URL";

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse or validate is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptcraftError::StorageError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as `null`, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PromptcraftError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptcraftError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `model`, `base_url` and `api_key_env` must be non-empty
    /// - `base_url` must be an http(s) URL
    /// - `timeout_seconds` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(PromptcraftError::UserError(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PromptcraftError::UserError(format!(
                "config validation failed: base_url must start with http:// or https:// (found '{}')",
                self.base_url
            )));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(PromptcraftError::UserError(
                "config validation failed: api_key_env must not be empty".to_string(),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(PromptcraftError::UserError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply `PROMPTCRAFT_MODEL` / `PROMPTCRAFT_BASE_URL` from the process
    /// environment, then re-validate.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Blank values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
        self.validate()
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Connection settings for the HTTP completion client.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
