//! Application state
//!
//! Explicit state objects owned by the caller, one per displayed list.

mod records;

pub use records::RecordList;
