//! Config struct definition and default implementation.

use crate::completion::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// Default completion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default upper bound on a single completion call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Configuration for promptcraft.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Completion API
    // =========================================================================
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    ///
    /// The key itself is never stored in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Seconds before an outstanding completion call is abandoned.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    // =========================================================================
    // Local state
    // =========================================================================
    /// Whether to append entries to the events log.
    #[serde(default = "default_true")]
    pub record_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
            record_events: default_true(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_true() -> bool {
    true
}
