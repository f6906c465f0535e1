//! Project model for promptcraft.
//!
//! A project describes the AI application a user is working on. Prompts and
//! architecture plans are always generated against one project, whose
//! name, description, category and tech stack are rendered into the request.
//!
//! Projects are persisted as a JSON list through a [`ProjectRepository`];
//! the list is owned by the repository and nothing else holds onto projects.

use crate::catalog::Template;
use crate::error::{PromptcraftError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod store;
pub mod types;


pub use store::{JsonFileRepository, MemoryRepository, ProjectRepository, ProjectStore};
pub use types::{ProjectCategory, TechStack, TechStackSet};

/// A persisted project.
///
/// Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tech_stack: TechStackSet,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The user-editable fields of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tech_stack: TechStackSet,
}

impl ProjectDraft {
    /// Trim text fields and reject an empty name.
    fn normalized(&self) -> Result<ProjectDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PromptcraftError::UserError(
                "project name must not be empty".to_string(),
            ));
        }

        Ok(ProjectDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            tech_stack: self.tech_stack.clone(),
        })
    }
}

impl Project {
    /// Create a new project with a fresh id and timestamps.
    pub fn new(draft: &ProjectDraft) -> Result<Self> {
        let draft = draft.normalized()?;
        let now = now_millis();

        Ok(Self {
            id: new_id(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            tech_stack: draft.tech_stack,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a project seeded from a catalog template.
    ///
    /// Name, description, category and tech stack are copied exactly; the
    /// project gets its own id and timestamps and keeps no link to the template.
    pub fn from_template(template: &Template) -> Self {
        let now = now_millis();

        Self {
            id: new_id(),
            name: template.name.to_string(),
            description: template.description.to_string(),
            category: template.category,
            tech_stack: TechStackSet::from(template.tech_stack),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit in place, keeping `id` and `created_at`.
    pub fn apply(&mut self, draft: &ProjectDraft) -> Result<()> {
        let draft = draft.normalized()?;

        self.name = draft.name;
        self.description = draft.description;
        self.category = draft.category;
        self.tech_stack = draft.tech_stack;
        self.updated_at = now_millis().max(self.updated_at);
        Ok(())
    }

    /// The editable fields of this project, for building an edit.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            tech_stack: self.tech_stack.clone(),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
