//! Implementation of the `promptcraft project` commands.

use super::record_event;
use crate::cli::{ProjectAction, ProjectAddArgs, ProjectEditArgs, ProjectIdArgs};
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::project::{Project, ProjectDraft};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Number of id characters shown in listings. Any unique prefix is accepted
/// wherever an id is expected.
const SHORT_ID_LEN: usize = 8;

pub fn dispatch(ctx: &AppContext, action: ProjectAction) -> Result<()> {
    match action {
        ProjectAction::Add(args) => cmd_add(ctx, args),
        ProjectAction::List => cmd_list(ctx),
        ProjectAction::Show(args) => cmd_show(ctx, args),
        ProjectAction::Edit(args) => cmd_edit(ctx, args),
        ProjectAction::Delete(args) => cmd_delete(ctx, args),
    }
}

fn cmd_add(ctx: &AppContext, args: ProjectAddArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let draft = ProjectDraft {
        name: args.name,
        description: args.description,
        category: args.category,
        tech_stack: args.tech.into(),
    };

    let project = ctx.project_store().create(&draft)?;

    record_event(
        ctx,
        &config,
        Event::new(EventAction::ProjectCreate)
            .with_project(&project.id)
            .with_details(json!({
                "name": project.name,
                "category": project.category,
            })),
    );

    println!("Created project {} ({})", project.name, short_id(&project.id));
    Ok(())
}

fn cmd_list(ctx: &AppContext) -> Result<()> {
    let projects = ctx.project_store().list()?;

    if projects.is_empty() {
        println!("No projects yet. Create one with `promptcraft project add <name>`.");
        return Ok(());
    }

    for project in &projects {
        println!("{}", list_line(project));
    }
    Ok(())
}

fn cmd_show(ctx: &AppContext, args: ProjectIdArgs) -> Result<()> {
    let project = ctx.project_store().get(&args.id)?;
    print!("{}", details(&project));
    Ok(())
}

fn cmd_edit(ctx: &AppContext, args: ProjectEditArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let store = ctx.project_store();
    let current = store.get(&args.id)?;

    let mut draft = current.to_draft();
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(tech) = args.tech {
        draft.tech_stack = tech.into();
    }

    let project = store.update(&current.id, &draft)?;

    record_event(
        ctx,
        &config,
        Event::new(EventAction::ProjectUpdate)
            .with_project(&project.id)
            .with_details(json!({ "name": project.name })),
    );

    println!("Updated project {} ({})", project.name, short_id(&project.id));
    Ok(())
}

fn cmd_delete(ctx: &AppContext, args: ProjectIdArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let project = ctx.project_store().delete(&args.id)?;

    record_event(
        ctx,
        &config,
        Event::new(EventAction::ProjectDelete)
            .with_project(&project.id)
            .with_details(json!({ "name": project.name })),
    );

    println!("Deleted project {} ({})", project.name, short_id(&project.id));
    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn list_line(project: &Project) -> String {
    let tech = if project.tech_stack.is_empty() {
        "-".to_string()
    } else {
        project.tech_stack.join(", ")
    };
    format!(
        "{}  {}  [{}]  {}",
        short_id(&project.id),
        project.name,
        project.category.label(),
        tech
    )
}

fn details(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:          {}\n", project.id));
    out.push_str(&format!("Name:        {}\n", project.name));
    out.push_str(&format!("Category:    {}\n", project.category.label()));

    let labels: Vec<&str> = project.tech_stack.iter().map(|t| t.label()).collect();
    out.push_str(&format!("Tech Stack:  {}\n", labels.join(", ")));
    out.push_str(&format!("Created:     {}\n", format_millis(project.created_at)));
    out.push_str(&format!("Updated:     {}\n", format_millis(project.updated_at)));

    if !project.description.is_empty() {
        out.push_str(&format!("\n{}\n", project.description));
    }
    out
}

fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}
