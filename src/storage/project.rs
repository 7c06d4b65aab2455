//! Project management
//!
//! Handles project initialization and provides access to the repository.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::DATA_DIR;
use super::{Config, LocalRepository, RecordStore};
use crate::domain::Catalog;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a tareas project. Run 'tareas init' first.")]
    NotInProject,
}

const DEFAULT_CONFIG: &str = r#"# tareas configuration

# Table ordering: "duration_first" (shortest first, then most urgent)
# or "completion_first" (unfinished first, then shortest)
order_policy = "duration_first"

# Rows per page: 5, 10 or 25
page_size = 5
"#;

/// A tareas project
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(DATA_DIR).is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let data_dir = root.join(DATA_DIR);

        fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create {} directory: {}", DATA_DIR, data_dir.display())
        })?;

        let config_path = data_dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .tareas directory path
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the priority/state catalog
    pub fn catalog(&self) -> Catalog {
        Catalog::standard()
    }

    /// Returns the task store
    pub fn task_store(&self) -> RecordStore {
        RecordStore::new(self.data_dir().join("tasks.jsonl"))
    }

    /// Returns the subtask store
    pub fn subtask_store(&self) -> RecordStore {
        RecordStore::new(self.data_dir().join("subtasks.jsonl"))
    }

    /// Returns the repository over this project's stores
    pub fn repository(&self) -> LocalRepository {
        LocalRepository::new(self.task_store(), self.subtask_store())
    }
}
