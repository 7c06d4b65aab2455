//! Priority and state labels
//!
//! Both label sets are closed, but records coming from a repository may carry
//! any string. Unknown labels are preserved verbatim in an `Other` variant so
//! they can still be displayed, filtered by exact match, and ranked last.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a task or subtask
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Urgente,
    Normal,
    Bajo,
    /// Any label outside the closed set
    Other(String),
}

impl Priority {
    /// The recognized labels, highest precedence first
    pub const KNOWN: [Priority; 3] = [Priority::Urgente, Priority::Normal, Priority::Bajo];

    /// Returns the exact label text
    pub fn label(&self) -> &str {
        match self {
            Priority::Urgente => "Urgente",
            Priority::Normal => "Normal",
            Priority::Bajo => "Bajo",
            Priority::Other(s) => s,
        }
    }

    /// Sort rank: 1 for Urgente through 3 for Bajo, 4 for anything else
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgente => 1,
            Priority::Normal => 2,
            Priority::Bajo => 3,
            Priority::Other(_) => 4,
        }
    }

    /// Returns true if the label belongs to the closed set
    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Other(_))
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s {
            "Urgente" => Priority::Urgente,
            "Normal" => Priority::Normal,
            "Bajo" => Priority::Bajo,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match Priority::from(s.as_str()) {
            Priority::Other(_) => Priority::Other(s),
            known => known,
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

impl FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Priority::from(s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Progress state of a task or subtask
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum State {
    Iniciada,
    EnProceso,
    Terminada,
    /// Any label outside the closed set
    Other(String),
}

impl State {
    /// The recognized labels in workflow order
    pub const KNOWN: [State; 3] = [State::Iniciada, State::EnProceso, State::Terminada];

    /// Returns the exact label text
    pub fn label(&self) -> &str {
        match self {
            State::Iniciada => "Iniciada",
            State::EnProceso => "En Proceso",
            State::Terminada => "Terminada",
            State::Other(s) => s,
        }
    }

    /// Returns true if this state represents finished work
    pub fn is_finished(&self) -> bool {
        matches!(self, State::Terminada)
    }

    /// Returns true if the label belongs to the closed set
    pub fn is_known(&self) -> bool {
        !matches!(self, State::Other(_))
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        match s {
            "Iniciada" => State::Iniciada,
            "En Proceso" => State::EnProceso,
            "Terminada" => State::Terminada,
            other => State::Other(other.to_string()),
        }
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        match State::from(s.as_str()) {
            State::Other(_) => State::Other(s),
            known => known,
        }
    }
}

impl From<State> for String {
    fn from(s: State) -> Self {
        match s {
            State::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

impl FromStr for State {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(State::from(s))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
