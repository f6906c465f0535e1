//! Architecture synthesis.
//!
//! Composes a request asking the completion API for a full technical
//! architecture as a JSON object, then validates the answer into an
//! [`ArchitecturePlan`]. A plan is all-or-nothing: any parse or shape error
//! is reported as `MalformedArchitectureResponse` and nothing is patched.
//!
//! Component dependencies are names only. They are not checked against the
//! other components in the plan, so dangling or forward references are kept
//! as given.

mod markdown;

#[cfg(test)]
mod tests;

pub use markdown::export_file_name;

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{PromptcraftError, Result};
use crate::generation::{Invocation, InvocationKind};
use crate::project::Project;
use crate::prompt::{project_vars, render_template};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ARCHITECTURE_TEMPLATE: &str = r#"You are a senior software architect. Design a comprehensive technical architecture for the following project.

{project_context}

Requirements:
{requirements}

Provide a detailed architecture including:
1. High-level overview and system design philosophy
2. Component breakdown with clear responsibilities and dependencies
3. Data model design with entities and relationships
4. API specification with key endpoints
5. Technical considerations including scalability, security, and deployment

Return your response as a JSON object with this exact structure:
{{
  "overview": "string - comprehensive architecture overview",
  "components": [
    {{
      "name": "string - component name",
      "description": "string - component purpose and functionality",
      "dependencies": ["string array - names of other components this depends on"]
    }}
  ],
  "dataModel": "string - detailed data model description",
  "apiSpec": "string - API endpoints and specifications",
  "techConsiderations": "string - scalability, security, deployment, and other technical considerations"
}}

Respond with only the JSON object and no other text."#;

/// A complete technical architecture for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturePlan {
    pub overview: String,
    pub components: Vec<Component>,
    pub data_model: String,
    pub api_spec: String,
    pub tech_considerations: String,
}

/// One component of an architecture plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub description: String,
    /// Names of the components this one depends on.
    pub dependencies: Vec<String>,
}

impl ArchitecturePlan {
    /// Names referenced as dependencies that no component in the plan carries.
    ///
    /// Informational only; such references are valid plan content.
    pub fn unresolved_dependencies(&self) -> Vec<&str> {
        let mut unresolved = Vec::new();
        for component in &self.components {
            for dep in &component.dependencies {
                let known = self.components.iter().any(|c| &c.name == dep);
                if !known && !unresolved.contains(&dep.as_str()) {
                    unresolved.push(dep.as_str());
                }
            }
        }
        unresolved
    }
}

/// Compose the architecture request for a project.
///
/// Pure and deterministic. `requirements` is embedded verbatim and must not
/// be blank.
pub fn architecture_request(requirements: &str, project: &Project) -> Result<String> {
    if requirements.trim().is_empty() {
        return Err(PromptcraftError::EmptyContext("requirements".to_string()));
    }

    let mut variables = project_vars(project);
    variables.insert("requirements", requirements.to_string());

    render_template(ARCHITECTURE_TEMPLATE, &variables).map_err(|e| {
        PromptcraftError::UserError(format!(
            "failed to render architecture request template: {}",
            e
        ))
    })
}

/// Validate a raw completion response into a plan.
///
/// The response must be a single JSON object carrying all five keys with the
/// documented types. Surrounding whitespace and one enclosing Markdown code
/// fence are tolerated; unknown extra keys are ignored.
pub fn parse_architecture(raw: &str) -> Result<ArchitecturePlan> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        PromptcraftError::MalformedArchitectureResponse(format!("response is not JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(PromptcraftError::MalformedArchitectureResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| PromptcraftError::MalformedArchitectureResponse(e.to_string()))
}

/// Ask the completion API for an architecture plan.
///
/// Exactly one outbound call is made. The result is not persisted.
pub async fn synthesize_architecture(
    client: &dyn CompletionClient,
    model: &str,
    requirements: &str,
    project: &Project,
) -> Result<ArchitecturePlan> {
    let mut invocation = Invocation::new(InvocationKind::Architecture);

    let prompt = invocation.compose(|| architecture_request(requirements, project))?;
    let completion = CompletionRequest::structured(prompt, model);
    let raw = invocation.await_response(client.complete(&completion)).await?;

    let plan = parse_architecture(&raw);
    if let Ok(plan) = &plan {
        tracing::info!(
            project = %project.id,
            components = plan.components.len(),
            "architecture plan generated"
        );
    }
    invocation.settle(plan)
}

/// Remove one enclosing ```` ``` ```` or ```` ```json ```` fence, if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. `json`) on the opening line.
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
