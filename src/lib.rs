//! tareas - tasks and subtasks ordered shortest-job-first
//!
//! Records carry a duration, a priority and a state. Tables show them in a
//! deterministic order (see [`domain::OrderPolicy`]), filtered by a search
//! string and label selections, one page at a time.

pub mod domain;
pub mod storage;
pub mod state;
pub mod view;
pub mod cli;

pub use domain::{order, visible_window, OrderPolicy, Priority, Record, RecordId, State};
