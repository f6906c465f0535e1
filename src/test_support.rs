use crate::completion::{CompletionClient, CompletionRequest};
use crate::context::AppContext;
use crate::error::{PromptcraftError, Result};
use crate::project::{Project, ProjectCategory, TechStack};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// Completion client that replays canned responses and records every request.
pub(crate) struct ScriptedCompletion {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub(crate) fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub(crate) fn failing(detail: &str) -> Self {
        Self::new(vec![Err(PromptcraftError::CompletionUnavailable(
            detail.to_string(),
        ))])
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(request.clone());

        self.responses
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(PromptcraftError::CompletionUnavailable(
                    "no scripted response left".to_string(),
                ))
            })
    }
}

/// The project used throughout the prompt and architecture tests.
pub(crate) fn sample_project() -> Project {
    Project {
        id: "7f1c2a9e-0000-4000-8000-000000000001".to_string(),
        name: "Foo".to_string(),
        description: "Internal tooling service".to_string(),
        category: ProjectCategory::Custom,
        tech_stack: [TechStack::Node].into_iter().collect(),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}

/// A workspace rooted in a temporary directory.
pub(crate) fn create_test_workspace() -> (TempDir, AppContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::resolve_from(temp_dir.path().join(".promptcraft"));
    (temp_dir, ctx)
}
