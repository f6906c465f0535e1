//! Access to the hosted text-completion service.
//!
//! The prompt engine and the architecture adapter only ever see the
//! [`CompletionClient`] trait. [`HttpCompletionClient`] talks to an
//! OpenAI-compatible `chat/completions` endpoint; tests substitute a scripted
//! client.
//!
//! Failures of any kind (transport, auth, rate limit, empty answer) surface as
//! [`PromptcraftError::CompletionUnavailable`](crate::error::PromptcraftError)
//! and are never retried here.

mod http;

pub use http::{HttpClientConfig, HttpCompletionClient};

use crate::error::Result;
use async_trait::async_trait;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// One call to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    /// Ask the service to answer with a JSON object.
    ///
    /// This is a hint only; callers must still validate what comes back.
    pub structured_output: bool,
}

impl CompletionRequest {
    /// A request for free-form text.
    pub fn text(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            structured_output: false,
        }
    }

    /// A request whose answer should be a JSON object.
    pub fn structured(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            structured_output: true,
        }
    }
}

/// A hosted text-completion capability.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `request` and return the raw text of the answer.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
