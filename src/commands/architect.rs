//! Implementation of the `promptcraft architect` command.
//!
//! Synthesizes an architecture plan and prints it as Markdown (or JSON with
//! `--json`). With `--export <dir>` the Markdown is also written to
//! `<dir>/<project-name>-architecture.md`.

use super::template::require_template;
use super::{completion_client, record_event};
use crate::architecture::{
    ArchitecturePlan, architecture_request, export_file_name, synthesize_architecture,
};
use crate::cli::ArchitectArgs;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::{PromptcraftError, Result};
use crate::events::{Event, EventAction};
use crate::fs::atomic_write_file;
use crate::project::Project;
use serde_json::json;
use std::path::{Path, PathBuf};

pub async fn cmd_architect(ctx: &AppContext, args: ArchitectArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let project = ctx.project_store().get(&args.project)?;
    let requirements = resolve_requirements(&args)?;

    if args.dry_run {
        println!("{}", architecture_request(&requirements, &project)?);
        return Ok(());
    }

    let client = completion_client(&config)?;
    let plan = run(ctx, &config, &client, &requirements, &project).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| {
            PromptcraftError::UserError(format!("failed to serialize architecture plan: {}", e))
        })?;
        println!("{}", json);
    } else {
        print!("{}", plan.to_markdown(&project.name));
    }

    for name in plan.unresolved_dependencies() {
        eprintln!("Warning: dependency '{}' does not name a component in the plan", name);
    }

    if let Some(dir) = args.export {
        let path = export_markdown(&dir, &plan, &project)?;
        println!("\nExported to {}", path.display());
    }
    Ok(())
}

/// Requirements text from `--requirements`, or the named template's requirements.
fn resolve_requirements(args: &ArchitectArgs) -> Result<String> {
    match (&args.requirements, &args.from_template) {
        (Some(requirements), _) => Ok(requirements.clone()),
        (None, Some(template_id)) => Ok(require_template(template_id)?.requirements.to_string()),
        (None, None) => Err(PromptcraftError::UserError(
            "either --requirements or --from-template is required".to_string(),
        )),
    }
}

/// Synthesize the plan and record the event.
async fn run(
    ctx: &AppContext,
    config: &Config,
    client: &dyn CompletionClient,
    requirements: &str,
    project: &Project,
) -> Result<ArchitecturePlan> {
    let plan = synthesize_architecture(client, &config.model, requirements, project).await?;

    record_event(
        ctx,
        config,
        Event::new(EventAction::ArchitectureGenerate)
            .with_project(&project.id)
            .with_details(json!({
                "model": config.model,
                "components": plan.components.len(),
                "unresolved_dependencies": plan.unresolved_dependencies().len(),
            })),
    );
    Ok(plan)
}

fn export_markdown(dir: &Path, plan: &ArchitecturePlan, project: &Project) -> Result<PathBuf> {
    let path = dir.join(export_file_name(&project.name));
    atomic_write_file(&path, &plan.to_markdown(&project.name))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::test_support::{ScriptedCompletion, create_test_workspace, sample_project};

    const PLAN: &str = r#"{"overview":"Layered service","components":[{"name":"Api","description":"HTTP layer","dependencies":["Db"]}],"dataModel":"Users","apiSpec":"GET /users","techConsiderations":"Cache reads"}"#;

    fn args(requirements: Option<&str>, from_template: Option<&str>) -> ArchitectArgs {
        ArchitectArgs {
            project: "ignored".to_string(),
            requirements: requirements.map(str::to_string),
            from_template: from_template.map(str::to_string),
            dry_run: false,
            export: None,
            json: false,
        }
    }

    #[test]
    fn test_requirements_from_flag() {
        let text = resolve_requirements(&args(Some("Must scale"), None)).unwrap();
        assert_eq!(text, "Must scale");
    }

    #[test]
    fn test_requirements_from_template() {
        let text = resolve_requirements(&args(None, Some("code-assistant-1"))).unwrap();
        assert!(text.starts_with("# Core Requirements"));
    }

    #[test]
    fn test_requirements_from_unknown_template() {
        assert!(resolve_requirements(&args(None, Some("missing-1"))).is_err());
        assert!(resolve_requirements(&args(None, None)).is_err());
    }

    #[tokio::test]
    async fn test_run_records_component_counts() {
        let (_temp, ctx) = create_test_workspace();
        let client = ScriptedCompletion::replying(PLAN);

        let plan = run(&ctx, &Config::default(), &client, "Must scale", &sample_project())
            .await
            .unwrap();
        assert_eq!(plan.components.len(), 1);

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::ArchitectureGenerate);
        assert_eq!(events[0].details["components"], 1);
        assert_eq!(events[0].details["unresolved_dependencies"], 1);
    }

    #[tokio::test]
    async fn test_malformed_plan_records_nothing() {
        let (_temp, ctx) = create_test_workspace();
        let client = ScriptedCompletion::replying("Sure! Here is your architecture:");

        let err = run(&ctx, &Config::default(), &client, "Must scale", &sample_project())
            .await
            .unwrap_err();
        assert!(matches!(err, PromptcraftError::MalformedArchitectureResponse(_)));
        assert!(read_events(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_export_writes_markdown_file() {
        let (temp, _ctx) = create_test_workspace();
        let plan: ArchitecturePlan = serde_json::from_str(PLAN).unwrap();
        let mut project = sample_project();
        project.name = "My App".to_string();

        let path = export_markdown(&temp.path().join("out"), &plan, &project).unwrap();

        assert_eq!(path, temp.path().join("out").join("my-app-architecture.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# My App - Architecture Plan\n"));
    }

    #[test]
    fn test_export_stays_inside_directory() {
        let (temp, _ctx) = create_test_workspace();
        let plan: ArchitecturePlan = serde_json::from_str(PLAN).unwrap();
        let mut project = sample_project();
        project.name = "../../escaped".to_string();
        let dir = temp.path().join("a").join("b");

        let path = export_markdown(&dir, &plan, &project).unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(path.exists());
        assert!(!temp.path().join("escaped-architecture.md").exists());
    }
}
