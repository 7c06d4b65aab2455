//! Domain models for tareas
//!
//! Contains the core ordering, filtering and validation logic without any
//! I/O concerns.

mod catalog;
mod draft;
mod id;
mod label;
mod ordering;
mod record;
mod window;

pub use catalog::{Catalog, LabelEntry};
pub use draft::{Field, FieldError, RecordDraft, ValidationErrors, MIN_NAME_LEN};
pub use id::{IdError, RecordId};
pub use label::{Priority, State};
pub use ordering::{order, OrderPolicy, UnknownPolicy};
pub use record::{Record, RecordFields, TaskLike};
pub use window::{visible_window, FilterCriteria, InvalidPageSize, Page, PageSize, Window};
