//! Workspace resolution for promptcraft.
//!
//! All local state (config, project list, event log) lives in one workspace
//! directory. It is `$PROMPTCRAFT_HOME` when set, otherwise `.promptcraft`
//! under the current working directory. Commands must go through
//! [`AppContext`] to find these paths.

use crate::config::Config;
use crate::error::{PromptcraftError, Result};
use crate::project::{JsonFileRepository, ProjectStore};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the workspace directory.
pub const HOME_ENV: &str = "PROMPTCRAFT_HOME";

/// Default workspace directory name, relative to the working directory.
pub const DEFAULT_WORKSPACE_DIR: &str = ".promptcraft";

/// Resolved workspace paths. All paths are absolute when resolved from the
/// environment.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Workspace directory holding all local state.
    pub workspace: PathBuf,
}

impl AppContext {
    /// Resolve the workspace from `PROMPTCRAFT_HOME` or the current directory.
    pub fn resolve() -> Result<Self> {
        if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::resolve_from(PathBuf::from(home)));
        }

        let cwd = env::current_dir().map_err(|e| {
            PromptcraftError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd.join(DEFAULT_WORKSPACE_DIR)))
    }

    /// Use `workspace` directly. It does not have to exist yet.
    pub fn resolve_from<P: AsRef<Path>>(workspace: P) -> Self {
        Self {
            workspace: workspace.as_ref().to_path_buf(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.workspace.join("config.yaml")
    }

    pub fn projects_path(&self) -> PathBuf {
        self.workspace.join("projects.json")
    }

    pub fn events_path(&self) -> PathBuf {
        self.workspace.join("events.ndjson")
    }

    /// Load the workspace config with environment overrides applied.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config_path())?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// The project store backed by this workspace's projects file.
    pub fn project_store(&self) -> ProjectStore<JsonFileRepository> {
        ProjectStore::new(JsonFileRepository::new(self.projects_path()))
    }
}
