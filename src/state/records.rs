//! In-memory mirror of one record list
//!
//! A [`RecordList`] holds the last list fetched for a scope and applies the
//! result of each create/update/delete round trip locally, so callers can
//! re-render without another fetch. Failed calls leave the list untouched.

use anyhow::Result;

use crate::domain::{Record, RecordFields, RecordId};
use crate::storage::{RecordRepository, Scope};

/// Last-known records of one scope
#[derive(Debug, Clone)]
pub struct RecordList {
    scope: Scope,
    records: Vec<Record>,
}

impl RecordList {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            records: Vec::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the list with a fresh fetch
    pub fn refresh(&mut self, repo: &dyn RecordRepository) -> Result<()> {
        self.records = repo.fetch(&self.scope)?;
        Ok(())
    }

    /// Creates a record and puts it at the front of the list
    pub fn add(&mut self, repo: &dyn RecordRepository, fields: RecordFields) -> Result<Record> {
        let record = repo.create(&self.scope, fields)?;
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Updates a record and swaps the stored version into place
    pub fn update(
        &mut self,
        repo: &dyn RecordRepository,
        id: &RecordId,
        fields: RecordFields,
    ) -> Result<Record> {
        let record = repo.update(id, fields)?;
        if let Some(slot) = self.records.iter_mut().find(|r| &r.id == id) {
            *slot = record.clone();
        }
        Ok(record)
    }

    /// Deletes a record and drops it from the list
    pub fn remove(&mut self, repo: &dyn RecordRepository, id: &RecordId) -> Result<()> {
        repo.delete(id)?;
        self.records.retain(|r| &r.id != id);
        Ok(())
    }
}
