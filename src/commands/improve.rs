//! Implementation of the `promptcraft improve` command.

use super::{completion_client, record_event};
use crate::cli::ImproveArgs;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::improve::improve_prompt;
use serde_json::json;

pub async fn cmd_improve(ctx: &AppContext, args: ImproveArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let client = completion_client(&config)?;

    let improved = run(ctx, &config, &client, &args.request).await?;
    println!("{}", improved);
    Ok(())
}

async fn run(
    ctx: &AppContext,
    config: &Config,
    client: &dyn CompletionClient,
    request: &str,
) -> Result<String> {
    let improved = improve_prompt(client, &config.model, request).await?;

    record_event(
        ctx,
        config,
        Event::new(EventAction::PromptImprove).with_details(json!({
            "model": config.model,
            "input_chars": request.len(),
            "chars": improved.len(),
        })),
    );
    Ok(improved)
}
