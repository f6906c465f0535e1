//! Project context shared by every instruction template.
//!
//! Both the prompt engine and the architecture adapter open their requests
//! with the same four-line project block:
//!
//! ```text
//! Project: Foo
//! Description: A thing that does stuff
//! Category: custom
//! Tech Stack: react, node
//! ```

use super::template::{TemplateVars, vars};
use crate::project::Project;

/// Render the project block embedded in every request.
pub fn project_context_block(project: &Project) -> String {
    format!(
        "Project: {}\nDescription: {}\nCategory: {}\nTech Stack: {}",
        project.name,
        project.description,
        project.category,
        project.tech_stack.join(", ")
    )
}

/// Template variables describing a project.
///
/// `project_context` is the full block; the individual fields are also
/// exposed for templates that lay them out differently.
pub fn project_vars(project: &Project) -> TemplateVars {
    vars([
        ("project_context", project_context_block(project)),
        ("project_name", project.name.clone()),
        ("project_description", project.description.clone()),
        ("project_category", project.category.to_string()),
        ("tech_stack", project.tech_stack.join(", ")),
    ])
}

/// Render an optional labelled section.
///
/// Returns an empty string when `content` is absent or blank, so the section
/// disappears from the output entirely. Otherwise the content is kept
/// verbatim and followed by a blank line.
pub fn optional_section(label: &str, content: Option<&str>) -> String {
    match content {
        Some(text) if !text.trim().is_empty() => format!("{}:\n{}\n\n", label, text),
        _ => String::new(),
    }
}

/// Render a numbered checklist, one item per line.
pub fn numbered_list(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
