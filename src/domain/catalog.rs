//! Priority and state catalog
//!
//! Forms select priorities and states by catalog ID; tables show the label
//! name. The catalog maps between the two.

use serde::{Deserialize, Serialize};

use super::label::{Priority, State};

/// One selectable catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub id: String,
    pub name: String,
}

impl LabelEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The selectable priorities and states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub priorities: Vec<LabelEntry>,
    pub states: Vec<LabelEntry>,
}

impl Catalog {
    /// The standard catalog: IDs `1..=3` in label-set order
    pub fn standard() -> Self {
        let priorities = Priority::KNOWN
            .iter()
            .enumerate()
            .map(|(i, p)| LabelEntry::new((i + 1).to_string(), p.label()))
            .collect();
        let states = State::KNOWN
            .iter()
            .enumerate()
            .map(|(i, s)| LabelEntry::new((i + 1).to_string(), s.label()))
            .collect();

        Self { priorities, states }
    }

    /// Returns the priority name for an ID, or an empty string if unknown
    pub fn priority_name_by_id(&self, id: &str) -> &str {
        lookup(&self.priorities, id)
    }

    /// Returns the state name for an ID, or an empty string if unknown
    pub fn state_name_by_id(&self, id: &str) -> &str {
        lookup(&self.states, id)
    }

    /// Resolves a catalog ID or exact label name to a priority
    pub fn resolve_priority(&self, key: &str) -> Option<Priority> {
        resolve(&self.priorities, key).map(Priority::from)
    }

    /// Resolves a catalog ID or exact label name to a state
    pub fn resolve_state(&self, key: &str) -> Option<State> {
        resolve(&self.states, key).map(State::from)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup<'a>(entries: &'a [LabelEntry], id: &str) -> &'a str {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.as_str())
        .unwrap_or("")
}

fn resolve<'a>(entries: &'a [LabelEntry], key: &str) -> Option<&'a str> {
    let key = key.trim();
    entries
        .iter()
        .find(|e| e.id == key)
        .or_else(|| entries.iter().find(|e| e.name == key))
        .map(|e| e.name.as_str())
}
