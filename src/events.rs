//! Event log for promptcraft.
//!
//! Append-only audit trail of project changes and generations, stored as
//! NDJSON (one JSON object per line) in `<workspace>/events.ndjson`.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (project_create, prompt_generate, ...)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `project`: Optional project id
//! - `details`: Freeform object with action-specific details
//!
//! Generated text is never written here, only its size and the request shape.

use crate::context::AppContext;
use crate::error::{PromptcraftError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    ProjectCreate,
    ProjectUpdate,
    ProjectDelete,
    PromptGenerate,
    ArchitectureGenerate,
    PromptImprove,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::ProjectCreate => write!(f, "project_create"),
            EventAction::ProjectUpdate => write!(f, "project_update"),
            EventAction::ProjectDelete => write!(f, "project_delete"),
            EventAction::PromptGenerate => write!(f, "prompt_generate"),
            EventAction::ArchitectureGenerate => write!(f, "architecture_generate"),
            EventAction::PromptImprove => write!(f, "prompt_improve"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            project: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project = Some(project_id.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptcraftError::StorageError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// `USER@HOSTNAME`, with `unknown` for anything that cannot be determined.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the workspace event log, creating it if needed.
pub fn append_event(ctx: &AppContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_path();
    let json_line = event.to_ndjson_line()?;

    if !ctx.workspace.exists() {
        fs::create_dir_all(&ctx.workspace).map_err(|e| {
            PromptcraftError::StorageError(format!(
                "failed to create workspace directory '{}': {}",
                ctx.workspace.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            PromptcraftError::StorageError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptcraftError::StorageError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })
}

/// Read every event in the log, oldest first. A missing log is empty.
pub fn read_events(ctx: &AppContext) -> Result<Vec<Event>> {
    let events_file = ctx.events_path();
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        PromptcraftError::StorageError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                PromptcraftError::StorageError(format!(
                    "malformed event on line {} of '{}': {}",
                    i + 1,
                    events_file.display(),
                    e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_workspace;
    use serde_json::json;

    #[test]
    fn test_event_serializes_to_single_line() {
        let event = Event::new(EventAction::PromptGenerate)
            .with_project("p1")
            .with_details(json!({"task_type": "testing", "chars": 120}));

        let line = event.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["action"], "prompt_generate");
        assert_eq!(parsed["project"], "p1");
        assert_eq!(parsed["details"]["chars"], 120);
        assert!(parsed["actor"].as_str().unwrap().contains('@'));
    }

    #[test]
    fn test_project_is_omitted_when_absent() {
        let line = Event::new(EventAction::PromptImprove)
            .to_ndjson_line()
            .unwrap();
        assert!(!line.contains("\"project\""));
    }

    #[test]
    fn test_append_creates_workspace_and_appends() {
        let (_temp, ctx) = create_test_workspace();
        assert!(!ctx.workspace.exists());

        append_event(&ctx, &Event::new(EventAction::ProjectCreate).with_project("a")).unwrap();
        append_event(&ctx, &Event::new(EventAction::ProjectDelete).with_project("a")).unwrap();

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, EventAction::ProjectCreate);
        assert_eq!(events[1].action, EventAction::ProjectDelete);
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let (_temp, ctx) = create_test_workspace();
        assert!(read_events(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_action_display_matches_serde() {
        for action in [
            EventAction::ProjectCreate,
            EventAction::ProjectUpdate,
            EventAction::ProjectDelete,
            EventAction::PromptGenerate,
            EventAction::ArchitectureGenerate,
            EventAction::PromptImprove,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action));
        }
    }
}
