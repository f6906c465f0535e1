//! Markdown export of architecture plans.

use super::ArchitecturePlan;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Whitespace and path separators. The slug must stay a single file name.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/\\]+").expect("Invalid separator regex"));

impl ArchitecturePlan {
    /// Render the plan as a Markdown document titled after the project.
    pub fn to_markdown(&self, project_name: &str) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "# {} - Architecture Plan", project_name);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Overview");
        let _ = writeln!(out, "{}", self.overview);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Components");
        let _ = writeln!(out);

        let sections: Vec<String> = self
            .components
            .iter()
            .map(|component| {
                let dependencies = if component.dependencies.is_empty() {
                    "None".to_string()
                } else {
                    component.dependencies.join(", ")
                };
                format!(
                    "### {}\n{}\n\n**Dependencies:** {}\n",
                    component.name, component.description, dependencies
                )
            })
            .collect();
        let _ = writeln!(out, "{}", sections.join("\n"));

        let _ = writeln!(out, "## Data Model");
        let _ = writeln!(out, "{}", self.data_model);
        let _ = writeln!(out);
        let _ = writeln!(out, "## API Specification");
        let _ = writeln!(out, "{}", self.api_spec);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Technical Considerations");
        let _ = writeln!(out, "{}", self.tech_considerations);

        out
    }
}

/// File name for an exported plan, e.g. `my-app-architecture.md`.
///
/// Never contains a path separator, so joining it onto a directory cannot
/// leave that directory.
pub fn export_file_name(project_name: &str) -> String {
    let lower = project_name.to_lowercase();
    let slug = SEPARATOR_RUN.replace_all(&lower, "-");
    format!("{}-architecture.md", slug)
}
