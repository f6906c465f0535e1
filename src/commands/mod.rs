//! Command implementations for promptcraft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for building the completion
//! client and recording audit events.

mod architect;
mod improve;
mod project;
mod prompt;
mod template;

use crate::cli::Command;
use crate::completion::HttpCompletionClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{Event, append_event};

/// Dispatch a command to its implementation.
pub async fn dispatch(command: Command) -> Result<()> {
    let ctx = AppContext::resolve()?;
    tracing::debug!(workspace = %ctx.workspace.display(), "resolved workspace");

    match command {
        Command::Project(cmd) => project::dispatch(&ctx, cmd.action),
        Command::Template(cmd) => template::dispatch(&ctx, cmd.action),
        Command::Prompt(args) => prompt::cmd_prompt(&ctx, args).await,
        Command::Architect(args) => architect::cmd_architect(&ctx, args).await,
        Command::Improve(args) => improve::cmd_improve(&ctx, args).await,
    }
}

/// Build the HTTP completion client from config.
fn completion_client(config: &Config) -> Result<HttpCompletionClient> {
    if config.api_key().is_none() {
        tracing::warn!(
            env = %config.api_key_env,
            "no API key set; requests will be sent unauthenticated"
        );
    }
    HttpCompletionClient::new(config.http_client_config())
}

/// Append `event` to the audit log when event recording is enabled.
///
/// Failures are reported as warnings; the command itself has already succeeded.
fn record_event(ctx: &AppContext, config: &Config, event: Event) {
    if !config.record_events {
        return;
    }
    if let Err(e) = append_event(ctx, &event) {
        eprintln!("Warning: failed to log {} event: {}", event.action, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventAction, read_events};
    use crate::test_support::create_test_workspace;

    #[test]
    fn record_event_appends_when_enabled() {
        let (_temp, ctx) = create_test_workspace();
        let config = Config::default();

        record_event(&ctx, &config, Event::new(EventAction::PromptImprove));

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::PromptImprove);
    }

    #[test]
    fn record_event_skips_when_disabled() {
        let (_temp, ctx) = create_test_workspace();
        let config = Config {
            record_events: false,
            ..Config::default()
        };

        record_event(&ctx, &config, Event::new(EventAction::PromptImprove));

        assert!(!ctx.events_path().exists());
    }

    #[test]
    fn completion_client_builds_from_default_config() {
        assert!(completion_client(&Config::default()).is_ok());
    }
}
