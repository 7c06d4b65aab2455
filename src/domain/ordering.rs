//! Shortest-job-first display ordering
//!
//! Two policies are available:
//!
//! | Policy | Primary key | Tie-break |
//! |--------|-------------|-----------|
//! | [`OrderPolicy::DurationFirst`] | duration ascending | priority rank (Urgente, Normal, Bajo, other) |
//! | [`OrderPolicy::CompletionFirst`] | unfinished before `Terminada` | duration ascending among unfinished only |
//!
//! Both sorts are stable, so records with equal keys keep their input order.
//! Under `CompletionFirst` all finished records compare equal to each other.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::TaskLike;

#[derive(Debug, Error, PartialEq)]
#[error("Unknown ordering policy '{0}' (expected duration_first or completion_first)")]
pub struct UnknownPolicy(pub String);

/// How task lists are ordered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Shortest duration first, then most urgent
    #[default]
    DurationFirst,
    /// Unfinished work first, shortest duration first within it
    CompletionFirst,
}

impl OrderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPolicy::DurationFirst => "duration_first",
            OrderPolicy::CompletionFirst => "completion_first",
        }
    }

    /// Compares two records under this policy
    pub fn compare<T: TaskLike + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            OrderPolicy::DurationFirst => a
                .duration()
                .total_cmp(&b.duration())
                .then_with(|| a.priority().rank().cmp(&b.priority().rank())),
            OrderPolicy::CompletionFirst => {
                match (a.state().is_finished(), b.state().is_finished()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => a.duration().total_cmp(&b.duration()),
                }
            }
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "duration_first" | "sjf" => Ok(OrderPolicy::DurationFirst),
            "completion_first" => Ok(OrderPolicy::CompletionFirst),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Returns a newly ordered copy of `items`; the input is left untouched
pub fn order<T: TaskLike + Clone>(items: &[T], policy: OrderPolicy) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| policy.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::{Priority, State};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        tag: &'static str,
        duration: f64,
        priority: Priority,
        state: State,
    }

    impl TaskLike for Item {
        fn name(&self) -> &str {
            self.tag
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

    fn item(tag: &'static str, duration: f64, priority: &str, state: &str) -> Item {
        Item {
            tag,
            duration,
            priority: Priority::from(priority),
            state: State::from(state),
        }
    }

    fn tags(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.tag).collect()
    }

    #[test]
    fn duration_first_breaks_ties_by_priority() {
        let items = vec![
            item("a", 30.0, "Normal", "Iniciada"),
            item("b", 10.0, "Bajo", "Iniciada"),
            item("c", 10.0, "Urgente", "Iniciada"),
        ];

        let sorted = order(&items, OrderPolicy::DurationFirst);
        assert_eq!(tags(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn duration_is_numeric_not_lexical() {
        let items = vec![
            item("nine", 9.0, "Normal", "Iniciada"),
            item("hundred", 100.0, "Normal", "Iniciada"),
            item("twenty", 20.0, "Normal", "Iniciada"),
        ];

        let sorted = order(&items, OrderPolicy::DurationFirst);
        assert_eq!(tags(&sorted), vec!["nine", "twenty", "hundred"]);
    }

    #[test]
    fn unknown_priority_ranks_last() {
        let items = vec![
            item("other", 5.0, "Alta", "Iniciada"),
            item("bajo", 5.0, "Bajo", "Iniciada"),
        ];

        let sorted = order(&items, OrderPolicy::DurationFirst);
        assert_eq!(tags(&sorted), vec!["bajo", "other"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let items = vec![
            item("first", 5.0, "Normal", "Iniciada"),
            item("second", 5.0, "Normal", "Terminada"),
            item("third", 5.0, "Normal", "En Proceso"),
        ];

        let sorted = order(&items, OrderPolicy::DurationFirst);
        assert_eq!(tags(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn completion_first_puts_finished_last() {
        let items = vec![
            item("done", 5.0, "Urgente", "Terminada"),
            item("open", 20.0, "Bajo", "Iniciada"),
        ];

        let sorted = order(&items, OrderPolicy::CompletionFirst);
        assert_eq!(tags(&sorted), vec!["open", "done"]);
    }

    #[test]
    fn completion_first_orders_unfinished_by_duration() {
        let items = vec![
            item("long", 50.0, "Normal", "En Proceso"),
            item("short", 5.0, "Normal", "Iniciada"),
            item("unknown-state", 1.0, "Normal", "Pausada"),
        ];

        let sorted = order(&items, OrderPolicy::CompletionFirst);
        assert_eq!(tags(&sorted), vec!["unknown-state", "short", "long"]);
    }

    #[test]
    fn completion_first_leaves_finished_in_input_order() {
        let items = vec![
            item("done-long", 90.0, "Normal", "Terminada"),
            item("done-short", 1.0, "Normal", "Terminada"),
            item("open", 30.0, "Normal", "Iniciada"),
        ];

        let sorted = order(&items, OrderPolicy::CompletionFirst);
        assert_eq!(tags(&sorted), vec!["open", "done-long", "done-short"]);
    }

    #[test]
    fn empty_and_single() {
        let empty: Vec<Item> = vec![];
        assert!(order(&empty, OrderPolicy::DurationFirst).is_empty());

        let single = vec![item("only", 3.0, "Bajo", "Iniciada")];
        assert_eq!(order(&single, OrderPolicy::CompletionFirst), single);
    }

    #[test]
    fn input_is_not_mutated() {
        let items = vec![
            item("b", 20.0, "Normal", "Iniciada"),
            item("a", 10.0, "Normal", "Iniciada"),
        ];
        let before = items.clone();

        let _ = order(&items, OrderPolicy::DurationFirst);
        assert_eq!(items, before);
    }

    #[test]
    fn parse_policy_names() {
        assert_eq!("duration_first".parse(), Ok(OrderPolicy::DurationFirst));
        assert_eq!("SJF".parse(), Ok(OrderPolicy::DurationFirst));
        assert_eq!("completion-first".parse(), Ok(OrderPolicy::CompletionFirst));
        assert!("fifo".parse::<OrderPolicy>().is_err());
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in [OrderPolicy::DurationFirst, OrderPolicy::CompletionFirst] {
            assert_eq!(policy.to_string().parse::<OrderPolicy>(), Ok(policy));
        }
    }
}
