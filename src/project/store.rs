//! Project persistence.
//!
//! The project list lives outside the prompt and architecture core. It is
//! reached only through the [`ProjectRepository`] trait, so callers inject
//! either the on-disk JSON file or an in-memory list.

use super::{Project, ProjectDraft};
use crate::catalog::Template;
use crate::error::{PromptcraftError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Load/save access to the full project list.
pub trait ProjectRepository {
    fn load(&self) -> Result<Vec<Project>>;
    fn save(&self, projects: &[Project]) -> Result<()>;
}

/// Stores the project list as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectRepository for JsonFileRepository {
    /// A missing file is an empty list.
    fn load(&self) -> Result<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            PromptcraftError::StorageError(format!(
                "failed to read projects file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            PromptcraftError::StorageError(format!(
                "failed to parse projects file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        let mut json = serde_json::to_string_pretty(projects).map_err(|e| {
            PromptcraftError::StorageError(format!("failed to serialize projects: {}", e))
        })?;
        json.push('\n');

        atomic_write_file(&self.path, &json)
    }
}

/// Keeps the project list in memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    projects: Mutex<Vec<Project>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }
}

impl ProjectRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Project>> {
        let projects = self
            .projects
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        Ok(projects.clone())
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        let mut stored = self
            .projects
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        *stored = projects.to_vec();
        Ok(())
    }
}

/// Create/read/update/delete operations over a repository.
///
/// Every mutation is a full load-modify-save of the list.
pub struct ProjectStore<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All projects, in stored order.
    pub fn list(&self) -> Result<Vec<Project>> {
        self.repo.load()
    }

    /// Look up a project by id, or by a unique id prefix.
    pub fn get(&self, id: &str) -> Result<Project> {
        let projects = self.repo.load()?;
        let index = find_index(&projects, id)?;
        Ok(projects[index].clone())
    }

    pub fn create(&self, draft: &ProjectDraft) -> Result<Project> {
        let project = Project::new(draft)?;
        self.insert(project)
    }

    pub fn create_from_template(&self, template: &Template) -> Result<Project> {
        self.insert(Project::from_template(template))
    }

    pub fn update(&self, id: &str, draft: &ProjectDraft) -> Result<Project> {
        let mut projects = self.repo.load()?;
        let index = find_index(&projects, id)?;
        projects[index].apply(draft)?;
        let updated = projects[index].clone();

        self.repo.save(&projects)?;
        tracing::debug!(project = %updated.id, "project updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<Project> {
        let mut projects = self.repo.load()?;
        let index = find_index(&projects, id)?;
        let removed = projects.remove(index);

        self.repo.save(&projects)?;
        tracing::debug!(project = %removed.id, "project deleted");
        Ok(removed)
    }

    fn insert(&self, project: Project) -> Result<Project> {
        let mut projects = self.repo.load()?;
        projects.push(project.clone());

        self.repo.save(&projects)?;
        tracing::debug!(project = %project.id, "project created");
        Ok(project)
    }
}

/// Resolve an exact id first, then a unique prefix.
fn find_index(projects: &[Project], id: &str) -> Result<usize> {
    let id = id.trim();
    if id.is_empty() {
        return Err(PromptcraftError::UserError(
            "project id must not be empty".to_string(),
        ));
    }

    if let Some(index) = projects.iter().position(|p| p.id == id) {
        return Ok(index);
    }

    let matches: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id.starts_with(id))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(PromptcraftError::UserError(format!(
            "project not found: {}",
            id
        ))),
        _ => Err(PromptcraftError::UserError(format!(
            "project id prefix '{}' is ambiguous ({} matches)",
            id,
            matches.len()
        ))),
    }
}
