//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Project setup | `init`, `labels`, `config show` |
//! | Task | Top-level records | `task add`, `task list`, `task show` |
//! | Subtask | Records under a task | `subtask add`, `subtask list` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! tareas --verbose task list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod subtask;
mod table;
mod task;

pub use app::{Cli, Commands, ConfigCommands, run};
pub use output::{Output, OutputFormat};
