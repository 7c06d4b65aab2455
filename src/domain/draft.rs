//! Form validation for new and edited records
//!
//! A draft holds raw user input. Validation checks every field and reports
//! one message per violating field, so a form can flag them all at once.

use std::fmt;

use thiserror::Error;

use super::catalog::Catalog;
use super::record::{Record, RecordFields};

/// Minimum name length, counted in characters after trimming
pub const MIN_NAME_LEN: usize = 3;

/// A form field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Duration,
    Priority,
    State,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Duration => "duration",
            Field::Priority => "priority",
            Field::State => "state",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every violated constraint of a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Returns the message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw form input for a task or subtask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub description: String,
    /// Duration in minutes, as typed
    pub duration: String,
    /// Catalog ID or label name
    pub priority: String,
    /// Catalog ID or label name
    pub state: String,
}

impl RecordDraft {
    /// Prefills a draft from an existing record (edit mode)
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            duration: record.duration.to_string(),
            priority: record.priority.label().to_string(),
            state: record.state.label().to_string(),
        }
    }

    /// Validates every field and resolves labels through the catalog
    pub fn validate(&self, catalog: &Catalog) -> Result<RecordFields, ValidationErrors> {
        self.check(catalog, None)
    }

    /// Validates an edit of `existing`
    ///
    /// A label left at the record's stored value is kept even when the
    /// catalog does not know it.
    pub fn validate_edit(
        &self,
        catalog: &Catalog,
        existing: &Record,
    ) -> Result<RecordFields, ValidationErrors> {
        self.check(catalog, Some(existing))
    }

    fn check(
        &self,
        catalog: &Catalog,
        existing: Option<&Record>,
    ) -> Result<RecordFields, ValidationErrors> {
        let mut errors = Vec::new();
        let mut fail = |field: Field, message: String| errors.push(FieldError { field, message });

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            fail(
                Field::Name,
                format!("name is required (at least {} characters)", MIN_NAME_LEN),
            );
        }

        let duration = match self.duration.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Some(value),
            Ok(_) => {
                fail(Field::Duration, "must be greater than zero".to_string());
                None
            }
            Err(_) => {
                fail(Field::Duration, "must be a number of minutes".to_string());
                None
            }
        };

        let priority = if self.priority.trim().is_empty() {
            fail(Field::Priority, "select a priority".to_string());
            None
        } else {
            let resolved = catalog.resolve_priority(&self.priority).or_else(|| {
                existing
                    .filter(|r| r.priority.label() == self.priority.trim())
                    .map(|r| r.priority.clone())
            });
            if resolved.is_none() {
                fail(
                    Field::Priority,
                    format!("unknown priority '{}'", self.priority.trim()),
                );
            }
            resolved
        };

        let state = if self.state.trim().is_empty() {
            fail(Field::State, "select a state".to_string());
            None
        } else {
            let resolved = catalog.resolve_state(&self.state).or_else(|| {
                existing
                    .filter(|r| r.state.label() == self.state.trim())
                    .map(|r| r.state.clone())
            });
            if resolved.is_none() {
                fail(Field::State, format!("unknown state '{}'", self.state.trim()));
            }
            resolved
        };

        match (duration, priority, state) {
            (Some(duration), Some(priority), Some(state)) if errors.is_empty() => {
                let description = self.description.trim();
                Ok(RecordFields {
                    name: name.to_string(),
                    description: (!description.is_empty()).then(|| description.to_string()),
                    duration,
                    priority,
                    state,
                })
            }
            _ => Err(ValidationErrors(errors)),
        }
    }
}
