//! Implementation of the `promptcraft prompt` command.

use super::{completion_client, record_event};
use crate::cli::PromptArgs;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::prompt::{PromptRequest, generate_prompt};
use serde_json::json;

pub async fn cmd_prompt(ctx: &AppContext, args: PromptArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let project = ctx.project_store().get(&args.project)?;

    let mut request = PromptRequest::new(args.task_type, &project, args.context)?;
    if let Some(requirements) = args.requirements {
        request = request.with_additional_requirements(requirements);
    }

    if args.dry_run {
        println!("{}", request.build()?);
        return Ok(());
    }

    let client = completion_client(&config)?;
    let text = run(ctx, &config, &client, &request).await?;
    println!("{}", text);
    Ok(())
}

/// Generate the prompt and record the event.
async fn run(
    ctx: &AppContext,
    config: &Config,
    client: &dyn CompletionClient,
    request: &PromptRequest<'_>,
) -> Result<String> {
    let text = generate_prompt(client, &config.model, request).await?;

    record_event(
        ctx,
        config,
        Event::new(EventAction::PromptGenerate)
            .with_project(&request.project.id)
            .with_details(json!({
                "task_type": request.task_type,
                "model": config.model,
                "has_additional_requirements": request.additional_requirements.is_some(),
                "chars": text.len(),
            })),
    );
    Ok(text)
}
