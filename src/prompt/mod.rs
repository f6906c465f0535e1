//! Prompt template engine.
//!
//! Given a task type, a project and free-text context, composes the
//! instruction sent to the completion API. Composition is pure and
//! deterministic: identical inputs always produce byte-identical output.
//!
//! Every task type shares one skeleton:
//!
//! ```text
//! You are an expert prompt engineer. Generate an optimized prompt for {goal}.
//!
//! {project_context}
//!
//! Specific Context:
//! {specific_context}
//!
//! [Additional Requirements:
//! {additional_requirements}
//!
//! ]Create a comprehensive, well-structured prompt that:
//! 1. ...
//! 6. ...
//!
//! {output_instruction}
//! ```
//!
//! The bracketed section is emitted only when additional requirements are
//! given. The goal, the six-item checklist and the closing instruction come
//! from [`TaskType`].

mod context;
mod template;

#[cfg(test)]
mod tests;

pub use context::{numbered_list, optional_section, project_context_block, project_vars};
pub use template::{TemplateError, TemplateVars, render_template, vars};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{PromptcraftError, Result};
use crate::generation::{Invocation, InvocationKind};
use crate::project::Project;
use serde::{Deserialize, Serialize};
use std::fmt;

const PROMPT_TEMPLATE: &str = "\
You are an expert prompt engineer. Generate an optimized prompt for {goal}.

{project_context}

Specific Context:
{specific_context}

{additional_requirements}Create a comprehensive, well-structured prompt that:
{checklist}

{output_instruction}";

/// The kind of development task a generated prompt is optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    CodeGeneration,
    ArchitectureDesign,
    Testing,
    Documentation,
    Refactoring,
    Debugging,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        TaskType::CodeGeneration,
        TaskType::ArchitectureDesign,
        TaskType::Testing,
        TaskType::Documentation,
        TaskType::Refactoring,
        TaskType::Debugging,
    ];

    /// Parse a task type from its serialized id (e.g. `code-generation`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::CodeGeneration => "code-generation",
            TaskType::ArchitectureDesign => "architecture-design",
            TaskType::Testing => "testing",
            TaskType::Documentation => "documentation",
            TaskType::Refactoring => "refactoring",
            TaskType::Debugging => "debugging",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskType::CodeGeneration => "Code Generation",
            TaskType::ArchitectureDesign => "Architecture Design",
            TaskType::Testing => "Testing",
            TaskType::Documentation => "Documentation",
            TaskType::Refactoring => "Refactoring",
            TaskType::Debugging => "Debugging",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TaskType::CodeGeneration => "Generate code snippets and implementations",
            TaskType::ArchitectureDesign => "Design system architecture and component structure",
            TaskType::Testing => "Create unit tests, integration tests, and test strategies",
            TaskType::Documentation => "Generate technical documentation and guides",
            TaskType::Refactoring => "Improve code quality and structure",
            TaskType::Debugging => "Identify and fix bugs and issues",
        }
    }

    /// What the generated prompt is for, as named in the preamble.
    fn goal(&self) -> &'static str {
        match self {
            TaskType::CodeGeneration => "AI code generation",
            TaskType::ArchitectureDesign => "AI architecture design",
            TaskType::Testing => "AI-assisted testing",
            TaskType::Documentation => "AI documentation generation",
            TaskType::Refactoring => "AI code refactoring",
            TaskType::Debugging => "AI-assisted debugging",
        }
    }

    /// The quality criteria the generated prompt must satisfy.
    pub fn checklist(&self) -> [&'static str; 6] {
        match self {
            TaskType::CodeGeneration => [
                "Clearly defines the coding task",
                "Specifies the exact tech stack and frameworks",
                "Includes code style and best practices expectations",
                "Defines input/output requirements",
                "Specifies error handling needs",
                "Includes testing considerations",
            ],
            TaskType::ArchitectureDesign => [
                "Defines the system scope and boundaries",
                "Specifies scalability and performance requirements",
                "Identifies key technical constraints",
                "Requests component breakdown and relationships",
                "Asks for data flow and storage considerations",
                "Includes security and deployment requirements",
            ],
            TaskType::Testing => [
                "Specifies the code/feature to be tested",
                "Defines test coverage expectations (unit, integration, e2e)",
                "Identifies edge cases and error scenarios",
                "Requests test framework and library usage",
                "Includes mock/stub requirements",
                "Specifies assertion patterns and best practices",
            ],
            TaskType::Documentation => [
                "Identifies what needs to be documented (API, code, architecture, user guide)",
                "Specifies the target audience (developers, end-users, stakeholders)",
                "Defines documentation format and style",
                "Requests examples and use cases",
                "Includes troubleshooting and FAQ sections",
                "Specifies versioning and maintenance considerations",
            ],
            TaskType::Refactoring => [
                "Identifies the code quality issues to address",
                "Specifies refactoring goals (performance, readability, maintainability)",
                "Defines patterns and principles to follow (SOLID, DRY, etc.)",
                "Requests before/after explanations",
                "Ensures behavior preservation",
                "Includes testing recommendations",
            ],
            TaskType::Debugging => [
                "Describes the bug or error clearly",
                "Includes relevant error messages and stack traces",
                "Provides context about when the issue occurs",
                "Specifies the expected vs actual behavior",
                "Requests step-by-step debugging approach",
                "Asks for root cause analysis and prevention strategies",
            ],
        }
    }

    fn output_instruction(&self) -> &'static str {
        match self {
            TaskType::CodeGeneration => {
                "Format the output as a ready-to-use prompt that can be directly sent to an AI coding assistant."
            }
            TaskType::ArchitectureDesign => {
                "Format the output as a ready-to-use prompt for getting detailed architecture recommendations."
            }
            TaskType::Testing => {
                "Format the output as a ready-to-use prompt for generating comprehensive tests."
            }
            TaskType::Documentation => {
                "Format the output as a ready-to-use prompt for generating clear, comprehensive documentation."
            }
            TaskType::Refactoring => {
                "Format the output as a ready-to-use prompt for safe, effective code refactoring."
            }
            TaskType::Debugging => {
                "Format the output as a ready-to-use prompt for effective bug resolution."
            }
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prompt-generation request. Not persisted.
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    pub task_type: TaskType,
    pub project: &'a Project,
    pub specific_context: String,
    pub additional_requirements: Option<String>,
}

impl<'a> PromptRequest<'a> {
    /// Create a request, rejecting blank context.
    pub fn new(
        task_type: TaskType,
        project: &'a Project,
        specific_context: impl Into<String>,
    ) -> Result<Self> {
        let specific_context = specific_context.into();
        ensure_context(&specific_context)?;

        Ok(Self {
            task_type,
            project,
            specific_context,
            additional_requirements: None,
        })
    }

    /// Attach additional requirements. Blank text counts as absent.
    pub fn with_additional_requirements(mut self, requirements: impl Into<String>) -> Self {
        let requirements = requirements.into();
        self.additional_requirements = if requirements.trim().is_empty() {
            None
        } else {
            Some(requirements)
        };
        self
    }

    /// Compose the instruction string for this request.
    pub fn build(&self) -> Result<String> {
        build_prompt(
            self.task_type,
            self.project,
            &self.specific_context,
            self.additional_requirements.as_deref(),
        )
    }
}

/// Compose the instruction string for a task type.
///
/// `specific_context` is embedded verbatim and must not be blank.
/// `additional_requirements` produces an "Additional Requirements" section
/// only when present and non-blank.
pub fn build_prompt(
    task_type: TaskType,
    project: &Project,
    specific_context: &str,
    additional_requirements: Option<&str>,
) -> Result<String> {
    ensure_context(specific_context)?;

    let mut variables = project_vars(project);
    variables.insert("goal", task_type.goal().to_string());
    variables.insert("specific_context", specific_context.to_string());
    variables.insert(
        "additional_requirements",
        optional_section("Additional Requirements", additional_requirements),
    );
    variables.insert("checklist", numbered_list(&task_type.checklist()));
    variables.insert(
        "output_instruction",
        task_type.output_instruction().to_string(),
    );

    render_template(PROMPT_TEMPLATE, &variables).map_err(|e| {
        PromptcraftError::UserError(format!(
            "failed to render {} prompt template: {}",
            task_type, e
        ))
    })
}

/// Compose the prompt for `request` and send it to the completion API.
///
/// Returns the model's text unchanged.
pub async fn generate_prompt(
    client: &dyn CompletionClient,
    model: &str,
    request: &PromptRequest<'_>,
) -> Result<String> {
    let mut invocation = Invocation::new(InvocationKind::Prompt);

    let prompt = invocation.compose(|| request.build())?;
    let completion = CompletionRequest::text(prompt, model);
    let response = invocation.await_response(client.complete(&completion)).await?;

    tracing::info!(
        task_type = %request.task_type,
        project = %request.project.id,
        chars = response.len(),
        "prompt generated"
    );
    invocation.settle(Ok(response))
}

fn ensure_context(specific_context: &str) -> Result<()> {
    if specific_context.trim().is_empty() {
        return Err(PromptcraftError::EmptyContext(
            "specific context".to_string(),
        ));
    }
    Ok(())
}
