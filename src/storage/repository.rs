//! Record repository
//!
//! [`RecordRepository`] is the boundary to whatever owns persistence. The
//! rest of the crate only ever sees lists of records coming back from it.
//! [`LocalRepository`] is the file-backed implementation used by the CLI.

use anyhow::Result;
use thiserror::Error;

use super::RecordStore;
use crate::domain::{Record, RecordFields, RecordId};

#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Parent task not found: {0}")]
    ParentNotFound(RecordId),
}

/// Which list a fetch or create targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Top-level tasks
    Tasks,
    /// Subtasks of one task
    Subtasks(RecordId),
}

impl Scope {
    pub fn parent(&self) -> Option<&RecordId> {
        match self {
            Scope::Tasks => None,
            Scope::Subtasks(id) => Some(id),
        }
    }
}

/// CRUD access to tasks and subtasks
pub trait RecordRepository {
    /// Returns every record in the scope
    fn fetch(&self, scope: &Scope) -> Result<Vec<Record>>;

    /// Creates a record in the scope and returns it as stored
    fn create(&self, scope: &Scope, fields: RecordFields) -> Result<Record>;

    /// Replaces the editable fields of a record and returns it as stored
    fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Record>;

    /// Deletes a record; deleting a task also deletes its subtasks
    fn delete(&self, id: &RecordId) -> Result<()>;

    /// Looks up a single task or subtask
    fn get(&self, id: &RecordId) -> Result<Record>;
}

/// Repository backed by two JSONL stores
pub struct LocalRepository {
    tasks: RecordStore,
    subtasks: RecordStore,
}

impl LocalRepository {
    pub fn new(tasks: RecordStore, subtasks: RecordStore) -> Self {
        Self { tasks, subtasks }
    }

    fn find(&self, id: &RecordId) -> Result<Option<Record>> {
        if let Some(task) = self.tasks.read_all()?.into_iter().find(|r| &r.id == id) {
            return Ok(Some(task));
        }
        Ok(self.subtasks.read_all()?.into_iter().find(|r| &r.id == id))
    }
}

impl RecordRepository for LocalRepository {
    fn fetch(&self, scope: &Scope) -> Result<Vec<Record>> {
        match scope {
            Scope::Tasks => self.tasks.read_all(),
            Scope::Subtasks(task_id) => Ok(self
                .subtasks
                .read_all()?
                .into_iter()
                .filter(|r| r.task_id.as_ref() == Some(task_id))
                .collect()),
        }
    }

    fn create(&self, scope: &Scope, fields: RecordFields) -> Result<Record> {
        match scope {
            Scope::Tasks => {
                let record = Record::new_task(fields);
                self.tasks.append(&record)?;
                Ok(record)
            }
            Scope::Subtasks(task_id) => {
                let parent_exists = self.tasks.read_all()?.iter().any(|r| &r.id == task_id);
                if !parent_exists {
                    return Err(RepositoryError::ParentNotFound(task_id.clone()).into());
                }
                let record = Record::new_subtask(task_id.clone(), fields);
                self.subtasks.append(&record)?;
                Ok(record)
            }
        }
    }

    fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Record> {
        let mut record = self
            .find(id)?
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        record.apply(fields);

        let store = if record.is_subtask() {
            &self.subtasks
        } else {
            &self.tasks
        };
        store.update(&record)?;
        Ok(record)
    }

    fn delete(&self, id: &RecordId) -> Result<()> {
        if self.tasks.remove(id)? {
            self.subtasks
                .remove_where(|r| r.task_id.as_ref() == Some(id))?;
            return Ok(());
        }
        if self.subtasks.remove(id)? {
            return Ok(());
        }
        Err(RepositoryError::NotFound(id.clone()).into())
    }

    fn get(&self, id: &RecordId) -> Result<Record> {
        self.find(id)?
            .ok_or_else(|| RepositoryError::NotFound(id.clone()).into())
    }
}
