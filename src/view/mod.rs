//! Presentation state
//!
//! [`TableView`] is the state machine behind a task or subtask table. It
//! owns the selections; rendering is left to the caller.

mod table;

pub use table::TableView;
