//! Task and subtask records
//!
//! Tasks and subtasks share one shape. A subtask is a record whose `task_id`
//! points at its parent task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::RecordId;
use super::label::{Priority, State};

/// Read access to the fields ordering and filtering look at
pub trait TaskLike {
    fn name(&self) -> &str;
    fn duration(&self) -> f64;
    fn priority(&self) -> &Priority;
    fn state(&self) -> &State;
}

/// Validated, user-editable fields of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes
    pub duration: f64,
    pub priority: Priority,
    pub state: State,
}

/// A task or subtask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Parent task (subtasks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<RecordId>,

    /// Display name
    pub name: String,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Duration in minutes
    pub duration: f64,

    pub priority: Priority,

    pub state: State,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Creates a new top-level task
    pub fn new_task(fields: RecordFields) -> Self {
        let now = Utc::now();
        let id = RecordId::generate(RecordId::TASK_PREFIX, &fields.name, now);
        Self::from_fields(id, None, fields, now)
    }

    /// Creates a new subtask under the given task
    pub fn new_subtask(task_id: RecordId, fields: RecordFields) -> Self {
        let now = Utc::now();
        let id = RecordId::generate(RecordId::SUBTASK_PREFIX, &fields.name, now);
        Self::from_fields(id, Some(task_id), fields, now)
    }

    fn from_fields(
        id: RecordId,
        task_id: Option<RecordId>,
        fields: RecordFields,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            task_id,
            name: fields.name,
            description: fields.description,
            duration: fields.duration,
            priority: fields.priority,
            state: fields.state,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if this record belongs to a parent task
    pub fn is_subtask(&self) -> bool {
        self.task_id.is_some()
    }

    /// Returns true if this record is finished
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Returns the editable fields
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            description: self.description.clone(),
            duration: self.duration,
            priority: self.priority.clone(),
            state: self.state.clone(),
        }
    }

    /// Replaces every editable field, keeping identity and parent
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.duration = fields.duration;
        self.priority = fields.priority;
        self.state = fields.state;
        self.updated_at = Utc::now();
    }
}

impl TaskLike for Record {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn priority(&self) -> &Priority {
        &self.priority
    }

    fn state(&self) -> &State {
        &self.state
    }
}

impl<T: TaskLike + ?Sized> TaskLike for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn priority(&self) -> &Priority {
        (**self).priority()
    }

    fn state(&self) -> &State {
        (**self).state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> RecordFields {
        RecordFields {
            name: name.to_string(),
            description: None,
            duration: 30.0,
            priority: Priority::Normal,
            state: State::Iniciada,
        }
    }

    #[test]
    fn new_task_has_no_parent() {
        let task = Record::new_task(fields("Write report"));
        assert!(!task.is_subtask());
        assert!(task.id.as_str().starts_with("t-"));
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn new_subtask_points_at_parent() {
        let task = Record::new_task(fields("Write report"));
        let sub = Record::new_subtask(task.id.clone(), fields("Outline"));

        assert!(sub.is_subtask());
        assert_eq!(sub.task_id.as_ref(), Some(&task.id));
        assert!(sub.id.as_str().starts_with("s-"));
    }

    #[test]
    fn apply_keeps_identity() {
        let mut task = Record::new_task(fields("Draft"));
        let id = task.id.clone();
        let created = task.created_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.apply(RecordFields {
            state: State::Terminada,
            ..fields("Final")
        });

        assert_eq!(task.id, id);
        assert_eq!(task.name, "Final");
        assert!(task.is_finished());
        assert!(task.updated_at > created);
    }

    #[test]
    fn serde_roundtrip() {
        let mut task = Record::new_task(fields("Buy milk"));
        task.description = Some("Two liters".to_string());
        task.priority = Priority::Other("Alta".to_string());

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, task);
        assert!(!json.contains("task_id"));
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"id":"42","name":"Buy eggs","duration":15,"priority":"Urgente","state":"En Proceso","created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_str(), "42");
        assert_eq!(record.duration, 15.0);
        assert_eq!(record.state, State::EnProceso);
        assert!(record.description.is_none());
    }
}
