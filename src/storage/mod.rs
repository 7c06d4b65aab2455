//! # Storage Layer
//!
//! Persistence layer for tareas with git-friendly file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSONL (one JSON per line) | `.tareas/tasks.jsonl` |
//! | Subtasks | JSONL (one JSON per line) | `.tareas/subtasks.jsonl` |
//! | Config | TOML | `.tareas/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`RecordStore`] readers take a shared `fs2` lock on the data file
//! - Writers hold an exclusive lock on `<store>.jsonl.lock` across the whole
//!   read-modify-write, so concurrent processes cannot lose an update
//! - All rewrites are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a tareas project
//! - [`RecordRepository`] - CRUD boundary the rest of the crate talks to
//! - [`LocalRepository`] - Repository over the project's JSONL files
//! - [`Config`] - Project and global configuration

mod config;
mod jsonl;
mod project;
mod repository;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, DATA_DIR};
pub use jsonl::RecordStore;
pub use project::{Project, ProjectError};
pub use repository::{LocalRepository, RecordRepository, RepositoryError, Scope};
