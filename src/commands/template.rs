//! Implementation of the `promptcraft template` commands.

use super::record_event;
use crate::catalog::{Template, template_by_id, templates, templates_by_category};
use crate::cli::{TemplateAction, TemplateIdArgs, TemplateListArgs};
use crate::context::AppContext;
use crate::error::{PromptcraftError, Result};
use crate::events::{Event, EventAction};
use serde_json::json;

pub fn dispatch(ctx: &AppContext, action: TemplateAction) -> Result<()> {
    match action {
        TemplateAction::List(args) => cmd_list(args),
        TemplateAction::Show(args) => cmd_show(args),
        TemplateAction::Use(args) => cmd_use(ctx, args),
    }
}

fn cmd_list(args: TemplateListArgs) -> Result<()> {
    let selected: Vec<&Template> = match args.category {
        Some(category) => templates_by_category(category),
        None => templates().iter().collect(),
    };

    if selected.is_empty() {
        println!("No templates in this category.");
        return Ok(());
    }

    for template in selected {
        println!(
            "{}  {}  [{}]  {}",
            template.id,
            template.name,
            template.category.label(),
            template.description
        );
    }
    Ok(())
}

fn cmd_show(args: TemplateIdArgs) -> Result<()> {
    let template = require_template(&args.id)?;
    print!("{}", details(template));
    Ok(())
}

fn cmd_use(ctx: &AppContext, args: TemplateIdArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let template = require_template(&args.id)?;
    let project = ctx.project_store().create_from_template(template)?;

    record_event(
        ctx,
        &config,
        Event::new(EventAction::ProjectCreate)
            .with_project(&project.id)
            .with_details(json!({
                "name": project.name,
                "template": template.id,
            })),
    );

    println!("Created project {} from template {}", project.name, template.id);
    println!("Project ID: {}", project.id);
    println!();
    println!(
        "Next: promptcraft architect --project {} --from-template {}",
        project.id, template.id
    );
    Ok(())
}

/// Look up a catalog template, or fail with the list of valid ids.
pub(super) fn require_template(id: &str) -> Result<&'static Template> {
    template_by_id(id).ok_or_else(|| {
        let valid: Vec<&str> = templates().iter().map(|t| t.id).collect();
        PromptcraftError::UserError(format!(
            "template not found: {} (available: {})",
            id,
            valid.join(", ")
        ))
    })
}

fn details(template: &Template) -> String {
    let tech: Vec<&str> = template.tech_stack.iter().map(|t| t.label()).collect();
    format!(
        "{} ({})\nCategory:    {}\nTech Stack:  {}\n\n{}\n\n{}\n\n# Architecture Overview\n{}\n",
        template.name,
        template.id,
        template.category.label(),
        tech.join(", "),
        template.description,
        template.requirements.trim_end(),
        template.architecture_overview.trim_end()
    )
}
