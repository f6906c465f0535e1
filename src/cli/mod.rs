//! CLI argument parsing for promptcraft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::project::{ProjectCategory, TechStack};
use crate::prompt::TaskType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptcraft: prompt and architecture generation for AI-assisted projects.
///
/// Projects describe what you are building. From a project you can:
/// - generate an optimized prompt for a coding task
/// - synthesize a structured architecture plan
/// - improve a short, informal request into a clear prompt
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptcraft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage saved projects.
    Project(ProjectCommand),

    /// Browse the built-in project templates.
    Template(TemplateCommand),

    /// Generate an optimized prompt for a task on a project.
    ///
    /// Composes the task-specific instruction and sends it to the
    /// completion API. Use `--dry-run` to print the instruction only.
    Prompt(PromptArgs),

    /// Synthesize an architecture plan for a project.
    ///
    /// Requests a JSON plan from the completion API and validates it
    /// before printing or exporting it.
    Architect(ArchitectArgs),

    /// Rewrite a short request into a clearer prompt.
    Improve(ImproveArgs),
}

/// Project subcommands.
#[derive(Parser, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

/// Available project actions.
#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Create a new project.
    Add(ProjectAddArgs),

    /// List saved projects.
    List,

    /// Show a project's details.
    Show(ProjectIdArgs),

    /// Edit fields of a project. Omitted fields keep their value.
    Edit(ProjectEditArgs),

    /// Delete a project.
    Delete(ProjectIdArgs),
}

/// Arguments for `project add`.
#[derive(Parser, Debug)]
pub struct ProjectAddArgs {
    /// Project name.
    pub name: String,

    /// What the project does.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Project category.
    #[arg(short, long, value_parser = parse_category, default_value = "custom")]
    pub category: ProjectCategory,

    /// Technologies used (comma-separated).
    #[arg(short, long, value_delimiter = ',', value_parser = parse_tech)]
    pub tech: Vec<TechStack>,
}

/// Arguments for `project edit`.
#[derive(Parser, Debug)]
pub struct ProjectEditArgs {
    /// Project ID (or unique prefix).
    pub id: String,

    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category.
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<ProjectCategory>,

    /// Replace the tech stack (comma-separated).
    #[arg(short, long, value_delimiter = ',', value_parser = parse_tech)]
    pub tech: Option<Vec<TechStack>>,
}

/// Arguments naming a single project.
#[derive(Parser, Debug)]
pub struct ProjectIdArgs {
    /// Project ID (or unique prefix).
    pub id: String,
}

/// Template subcommands.
#[derive(Parser, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Available template actions.
#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// List templates, optionally filtered by category.
    List(TemplateListArgs),

    /// Show a template's requirements and architecture overview.
    Show(TemplateIdArgs),

    /// Create a new project from a template.
    Use(TemplateIdArgs),
}

/// Arguments for `template list`.
#[derive(Parser, Debug)]
pub struct TemplateListArgs {
    /// Only list templates in this category.
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<ProjectCategory>,
}

/// Arguments naming a single template.
#[derive(Parser, Debug)]
pub struct TemplateIdArgs {
    /// Template ID (e.g. chatbot-1).
    pub id: String,
}

/// Arguments for `prompt`.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Project ID (or unique prefix).
    #[arg(short, long)]
    pub project: String,

    /// Task type.
    #[arg(short = 't', long = "type", value_parser = parse_task_type)]
    pub task_type: TaskType,

    /// What the task is about.
    #[arg(short, long)]
    pub context: String,

    /// Extra constraints for the generated prompt.
    #[arg(short, long)]
    pub requirements: Option<String>,

    /// Print the composed instruction without calling the API.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `architect`.
#[derive(Parser, Debug)]
pub struct ArchitectArgs {
    /// Project ID (or unique prefix).
    #[arg(short, long)]
    pub project: String,

    /// Requirements the architecture must satisfy.
    #[arg(
        short,
        long,
        conflicts_with = "from_template",
        required_unless_present = "from_template"
    )]
    pub requirements: Option<String>,

    /// Use a template's requirements text.
    #[arg(long)]
    pub from_template: Option<String>,

    /// Print the composed request without calling the API.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the plan as Markdown into this directory.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the plan as JSON instead of Markdown.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `improve`.
#[derive(Parser, Debug)]
pub struct ImproveArgs {
    /// The request to improve.
    pub request: String,
}

fn parse_category(s: &str) -> Result<ProjectCategory, String> {
    ProjectCategory::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected one of: {})", s, valid.join(", "))
    })
}

fn parse_tech(s: &str) -> Result<TechStack, String> {
    TechStack::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = TechStack::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown technology '{}' (expected one of: {})", s, valid.join(", "))
    })
}

fn parse_task_type(s: &str) -> Result<TaskType, String> {
    TaskType::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = TaskType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown task type '{}' (expected one of: {})", s, valid.join(", "))
    })
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Errors are returned rather than exiting, so the caller controls the
    /// exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
