//! Subtask CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::table::{EditArgs, FieldArgs, ListArgs};
use super::task::{add_record, delete_record, edit_record, list_records};
use crate::domain::RecordId;
use crate::storage::Scope;

#[derive(Subcommand)]
pub enum SubtaskCommands {
    /// Add a subtask under a task
    ///
    /// Example:
    ///   tareas subtask add t-1a2b3c4 "Collect figures" --duration 10 --priority Bajo --state Iniciada
    Add {
        /// Parent task ID
        task: String,

        /// Subtask name
        name: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a subtask
    Edit {
        /// Subtask ID
        id: String,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete a subtask
    Delete {
        /// Subtask ID
        id: String,

        /// Confirm the deletion
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the subtasks of a task in table order
    List {
        /// Parent task ID
        task: String,

        #[command(flatten)]
        list: ListArgs,
    },
}

pub fn run(cmd: SubtaskCommands, output: &Output) -> Result<()> {
    match cmd {
        SubtaskCommands::Add { task, name, fields } => {
            let task_id: RecordId = task.parse()?;
            add_record(output, Scope::Subtasks(task_id), fields.into_draft(name))
        }
        SubtaskCommands::Edit { id, changes } => edit_record(output, &id, changes, true),
        SubtaskCommands::Delete { id, yes } => delete_record(output, &id, yes, true),
        SubtaskCommands::List { task, list } => {
            let task_id: RecordId = task.parse()?;
            let title = format!("Subtasks of {}:", task_id);
            list_records(output, Scope::Subtasks(task_id), &list, &title)
        }
    }
}
