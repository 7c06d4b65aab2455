//! Task CLI commands

use anyhow::{bail, Result};
use clap::Subcommand;

use super::output::Output;
use super::table::{self, EditArgs, FieldArgs, ListArgs};
use crate::domain::{Record, RecordDraft, RecordId};
use crate::state::RecordList;
use crate::storage::{Project, RecordRepository, Scope};

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    ///
    /// Example:
    ///   tareas task add "Write report" --duration 30 --priority Urgente --state Iniciada
    Add {
        /// Task name
        name: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a task
    Edit {
        /// Task ID
        id: String,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete a task and its subtasks
    Delete {
        /// Task ID
        id: String,

        /// Confirm the deletion
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show a task with its subtasks
    Show {
        /// Task ID
        id: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List tasks in table order
    List {
        #[command(flatten)]
        list: ListArgs,
    },
}

pub fn run(cmd: TaskCommands, output: &Output) -> Result<()> {
    match cmd {
        TaskCommands::Add { name, fields } => {
            add_record(output, Scope::Tasks, fields.into_draft(name))
        }
        TaskCommands::Edit { id, changes } => edit_record(output, &id, changes, false),
        TaskCommands::Delete { id, yes } => delete_record(output, &id, yes, false),
        TaskCommands::Show { id, list } => show_task(output, &id, &list),
        TaskCommands::List { list } => list_records(output, Scope::Tasks, &list, ""),
    }
}

fn kind(subtask: bool) -> &'static str {
    if subtask {
        "subtask"
    } else {
        "task"
    }
}

/// Looks up a record and checks it belongs to the expected list
pub(super) fn load_record(
    repo: &dyn RecordRepository,
    id: &RecordId,
    subtask: bool,
) -> Result<Record> {
    let record = repo.get(id)?;
    if record.is_subtask() != subtask {
        bail!(
            "{} is a {}, not a {}",
            id,
            kind(record.is_subtask()),
            kind(subtask)
        );
    }
    Ok(record)
}

pub(super) fn add_record(output: &Output, scope: Scope, draft: RecordDraft) -> Result<()> {
    let project = Project::open_current()?;
    let fields = draft.validate(&project.catalog())?;
    let repo = project.repository();

    output.verbose_ctx("add", &format!("Creating {} '{}'", scope_kind(&scope), fields.name));

    let mut list = RecordList::new(scope);
    let record = list.add(&repo, fields)?;

    if output.is_json() {
        output.data(&record);
    } else {
        output.success(&format!(
            "Created {} {}: {}",
            kind(record.is_subtask()),
            record.id,
            record.name
        ));
    }

    Ok(())
}

pub(super) fn edit_record(output: &Output, id: &str, changes: EditArgs, subtask: bool) -> Result<()> {
    if changes.is_empty() {
        bail!("Nothing to change; pass at least one of --name, --description, --duration, --priority, --state");
    }

    let project = Project::open_current()?;
    let repo = project.repository();
    let id: RecordId = id.parse()?;

    let existing = load_record(&repo, &id, subtask)?;
    let fields = changes
        .merge_into(&existing)
        .validate_edit(&project.catalog(), &existing)?;

    output.verbose_ctx("edit", &format!("Updating {}", id));

    let mut list = RecordList::new(scope_of(&existing));
    let record = list.update(&repo, &id, fields)?;

    if output.is_json() {
        output.data(&record);
    } else {
        output.success(&format!("Updated {} {}: {}", kind(subtask), record.id, record.name));
    }

    Ok(())
}

pub(super) fn delete_record(output: &Output, id: &str, yes: bool, subtask: bool) -> Result<()> {
    let project = Project::open_current()?;
    let repo = project.repository();
    let id: RecordId = id.parse()?;

    let existing = load_record(&repo, &id, subtask)?;
    if !yes {
        bail!(
            "Refusing to delete {} '{}' without --yes",
            kind(subtask),
            existing.name
        );
    }

    output.verbose_ctx("delete", &format!("Deleting {}", id));
    let mut list = RecordList::new(scope_of(&existing));
    list.refresh(&repo)?;
    list.remove(&repo, &id)?;
    output.verbose_ctx(
        "delete",
        &format!("{} {}s left in the list", list.records().len(), kind(subtask)),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": id,
            "name": existing.name,
        }));
    } else {
        output.success(&format!("Deleted {} {}: {}", kind(subtask), id, existing.name));
    }

    Ok(())
}

pub(super) fn list_records(output: &Output, scope: Scope, args: &ListArgs, title: &str) -> Result<()> {
    let project = Project::open_current()?;
    let repo = project.repository();

    if let Some(parent) = scope.parent() {
        load_record(&repo, parent, false)?;
    }

    let mut list = RecordList::new(scope);
    list.refresh(&repo)?;
    output.verbose_ctx(
        "list",
        &format!("Loaded {} {}s", list.records().len(), scope_kind(list.scope())),
    );

    let (view, policy) = table::build_view(
        list.records(),
        args,
        &project.config().project,
        &project.catalog(),
    )?;
    table::print_view(output, &view, policy, title);

    Ok(())
}

/// The list a record belongs to
fn scope_of(record: &Record) -> Scope {
    match &record.task_id {
        Some(parent) => Scope::Subtasks(parent.clone()),
        None => Scope::Tasks,
    }
}

fn scope_kind(scope: &Scope) -> &'static str {
    kind(scope.parent().is_some())
}

fn show_task(output: &Output, id: &str, args: &ListArgs) -> Result<()> {
    let project = Project::open_current()?;
    let repo = project.repository();
    let id: RecordId = id.parse()?;

    let task = load_record(&repo, &id, false)?;

    let mut subtasks = RecordList::new(Scope::Subtasks(id));
    subtasks.refresh(&repo)?;
    let (view, policy) = table::build_view(
        subtasks.records(),
        args,
        &project.config().project,
        &project.catalog(),
    )?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "task": task,
            "subtasks": table::view_json(&view, policy),
        }));
        return Ok(());
    }

    println!("{}: {}", task.id, task.name);
    println!("Duration: {}", table::format_duration(task.duration));
    println!("Priority: {}", task.priority);
    println!("State: {}", task.state);
    if let Some(description) = &task.description {
        println!("Description: {}", description);
    }
    println!("Created: {}", task.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated: {}", task.updated_at.format("%Y-%m-%d %H:%M"));
    println!();

    table::print_view(output, &view, policy, "Subtasks:");

    Ok(())
}
