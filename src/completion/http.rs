//! OpenAI-compatible completion client.

use super::{CompletionClient, CompletionRequest};
use crate::error::{PromptcraftError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for [`HttpCompletionClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the API, without the trailing `/chat/completions`.
    pub base_url: String,
    /// Sent as a bearer token when present.
    pub api_key: Option<String>,
    /// Upper bound on a single request, including reading the body.
    pub timeout: Duration,
}

/// Completion client backed by `POST {base_url}/chat/completions`.
pub struct HttpCompletionClient {
    config: HttpClientConfig,
    client: Client,
}

impl HttpCompletionClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PromptcraftError::CompletionUnavailable(format!(
                    "failed to create HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatCompletionsRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            response_format: request.structured_output.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let endpoint = self.endpoint();
        tracing::debug!(
            endpoint = %endpoint,
            model = %request.model,
            structured = request.structured_output,
            prompt_chars = request.prompt.len(),
            "sending completion request"
        );

        let mut builder = self.client.post(&endpoint).json(&body);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            PromptcraftError::CompletionUnavailable(format!(
                "request to {} failed: {}",
                endpoint, e
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(PromptcraftError::CompletionUnavailable(format!(
                "API returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let parsed: ChatCompletionsResponse = response.json().await.map_err(|e| {
            PromptcraftError::CompletionUnavailable(format!(
                "failed to read completion response: {}",
                e
            ))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                PromptcraftError::CompletionUnavailable(
                    "completion response contained no text".to_string(),
                )
            })
    }
}
