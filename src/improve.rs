//! One-shot prompt improvement.
//!
//! Turns a short, informal request ("write a function that sorts an array")
//! into a clearer prompt. Unlike the task-type templates this needs no project.

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{PromptcraftError, Result};
use crate::generation::{Invocation, InvocationKind};
use crate::prompt::{render_template, vars};

const IMPROVE_TEMPLATE: &str = "\
You are an expert at improving prompts for AI assistants. Take the user's simple request and transform it into a clear, effective prompt that will get better results from AI.

User's request: {input}

Create an improved prompt that:
- Is clear and specific
- Includes helpful context
- Asks for the right output format
- Will get better AI results

Return only the improved prompt, ready to use.";

/// Compose the improvement instruction for `input`.
pub fn improvement_prompt(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(PromptcraftError::EmptyContext("request".to_string()));
    }

    render_template(IMPROVE_TEMPLATE, &vars([("input", input)])).map_err(|e| {
        PromptcraftError::UserError(format!("failed to render improvement template: {}", e))
    })
}

/// Send the improvement instruction and return the improved prompt.
pub async fn improve_prompt(
    client: &dyn CompletionClient,
    model: &str,
    input: &str,
) -> Result<String> {
    let mut invocation = Invocation::new(InvocationKind::Improvement);

    let prompt = invocation.compose(|| improvement_prompt(input))?;
    let completion = CompletionRequest::text(prompt, model);
    let improved = invocation.await_response(client.complete(&completion)).await?;

    invocation.settle(Ok(improved.trim().to_string()))
}
