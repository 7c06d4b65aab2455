//! Record identifiers
//!
//! IDs are opaque to the rest of the crate: any non-empty string coming back
//! from a repository is accepted as-is. Locally created records get
//! `{prefix}-{7-char-hash}` IDs (e.g., `t-7f2b4c1` for a task,
//! `s-9d3e5f2` for a subtask).
//!
//! Hash is derived from name + creation timestamp, so the same name created
//! twice still yields two different IDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Record ID must not be empty")]
    Empty,
}

/// Generates a 7-character hash from name and timestamp
fn generate_hash(name: &str, timestamp: DateTime<Utc>) -> String {
    let input = format!("{}{}", name, timestamp.timestamp_nanos_opt().unwrap_or(0));
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Opaque, stable identifier of a task or subtask
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Prefix used for locally generated task IDs
    pub const TASK_PREFIX: &'static str = "t";

    /// Prefix used for locally generated subtask IDs
    pub const SUBTASK_PREFIX: &'static str = "s";

    /// Generates a new ID from a prefix, the record name and its creation time
    pub fn generate(prefix: &str, name: &str, timestamp: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", prefix, generate_hash(name, timestamp)))
    }

    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn generated_id_format() {
        let id = RecordId::generate(RecordId::TASK_PREFIX, "Buy milk", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("t-"));
        assert_eq!(s.len(), 9);
        assert!(s[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn same_name_different_time_differs() {
        let now = Utc::now();
        let a = RecordId::generate(RecordId::SUBTASK_PREFIX, "Same", now);
        let b = RecordId::generate(RecordId::SUBTASK_PREFIX, "Same", now + Duration::seconds(1));

        assert_ne!(a, b);
    }

    #[test]
    fn parse_accepts_opaque_ids() {
        let id: RecordId = "  3f1c9a2e-uuid-from-backend ".parse().unwrap();
        assert_eq!(id.as_str(), "3f1c9a2e-uuid-from-backend");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("   ".parse::<RecordId>(), Err(IdError::Empty));
    }

    #[test]
    fn serde_uses_plain_string() {
        let id: RecordId = "t-abc1234".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"t-abc1234\"");

        let parsed: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
    }
}
