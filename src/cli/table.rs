//! Shared arguments and rendering for task and subtask tables

use anyhow::{bail, Result};
use clap::Args;

use super::output::Output;
use crate::domain::{
    order, Catalog, OrderPolicy, PageSize, Priority, Record, RecordDraft, State,
};
use crate::storage::ProjectConfig;
use crate::view::TableView;

/// Search, filter and paging options for a listing
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive search on the name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only show this priority (label or catalog ID)
    #[arg(long)]
    pub priority: Option<String>,

    /// Only show this state (label or catalog ID)
    #[arg(long)]
    pub state: Option<String>,

    /// Page to show, starting at 1
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page (5, 10 or 25)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Ordering policy (duration_first or completion_first)
    #[arg(long)]
    pub policy: Option<String>,
}

/// Field values for a new task or subtask
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Duration in minutes
    #[arg(long, default_value = "")]
    pub duration: String,

    /// Priority (label or catalog ID)
    #[arg(long, default_value = "")]
    pub priority: String,

    /// State (label or catalog ID)
    #[arg(long, default_value = "")]
    pub state: String,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
}

impl FieldArgs {
    pub fn into_draft(self, name: String) -> RecordDraft {
        RecordDraft {
            name,
            description: self.description.unwrap_or_default(),
            duration: self.duration,
            priority: self.priority,
            state: self.state,
        }
    }
}

/// Field changes for an existing task or subtask
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description (empty string clears it)
    #[arg(long)]
    pub description: Option<String>,

    /// New duration in minutes
    #[arg(long)]
    pub duration: Option<String>,

    /// New priority (label or catalog ID)
    #[arg(long)]
    pub priority: Option<String>,

    /// New state (label or catalog ID)
    #[arg(long)]
    pub state: Option<String>,
}

impl EditArgs {
    /// Applies the given changes over the record's current values
    pub fn merge_into(self, record: &Record) -> RecordDraft {
        let mut draft = RecordDraft::from_record(record);
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(duration) = self.duration {
            draft.duration = duration;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(state) = self.state {
            draft.state = state;
        }
        draft
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.duration.is_none()
            && self.priority.is_none()
            && self.state.is_none()
    }
}

/// Orders `records` and applies the listing options to a fresh table view
pub fn build_view(
    records: &[Record],
    args: &ListArgs,
    config: &ProjectConfig,
    catalog: &Catalog,
) -> Result<(TableView<Record>, OrderPolicy)> {
    let policy = match &args.policy {
        Some(name) => name.parse::<OrderPolicy>()?,
        None => config.order_policy,
    };
    let page_size = match args.page_size {
        Some(size) => PageSize::try_from(size)?,
        None => config.page_size,
    };
    if args.page == 0 {
        bail!("Page numbers start at 1");
    }

    let mut view = TableView::new(order(records, policy), page_size);
    view.set_search(args.search.as_str());
    view.set_priority_filter(args.priority.as_deref().map(|p| priority_filter(catalog, p)));
    view.set_state_filter(args.state.as_deref().map(|s| state_filter(catalog, s)));
    view.set_page(args.page - 1);

    Ok((view, policy))
}

/// Catalog IDs resolve to their label; anything else is matched verbatim
fn priority_filter(catalog: &Catalog, key: &str) -> Priority {
    catalog
        .resolve_priority(key)
        .unwrap_or_else(|| Priority::from(key))
}

fn state_filter(catalog: &Catalog, key: &str) -> State {
    catalog.resolve_state(key).unwrap_or_else(|| State::from(key))
}

/// Prints the visible rows of a table view
pub fn print_view(output: &Output, view: &TableView<Record>, policy: OrderPolicy, title: &str) {
    let window = view.window();

    if output.is_json() {
        output.data(&view_json(view, policy));
        return;
    }

    if !title.is_empty() {
        println!("{}", title);
    }

    if window.is_empty() {
        println!("No items to show.");
    } else {
        print_rows(window.items.iter());
    }

    match window.range() {
        Some((first, last)) => println!(
            "Showing {}-{} of {} (page {}/{}, {})",
            first,
            last,
            window.total,
            window.page.index + 1,
            window.page_count(),
            policy
        ),
        None => println!(
            "Showing 0 of {} (page {}/{}, {})",
            window.total,
            window.page.index + 1,
            window.page_count(),
            policy
        ),
    }
}

/// JSON shape of the visible window
pub fn view_json(view: &TableView<Record>, policy: OrderPolicy) -> serde_json::Value {
    let window = view.window();
    serde_json::json!({
        "items": window.items,
        "total": window.total,
        "page": window.page.index + 1,
        "page_size": window.page.size.get(),
        "pages": window.page_count(),
        "policy": policy.as_str(),
    })
}

fn print_rows<'a>(records: impl Iterator<Item = &'a Record>) {
    println!(
        "{:<12} {:<28} {:>9}  {:<9} {:<10} DESCRIPTION",
        "ID", "NAME", "DURATION", "PRIORITY", "STATE"
    );
    println!("{}", "-".repeat(90));
    for record in records {
        println!(
            "{:<12} {:<28} {:>9}  {:<9} {:<10} {}",
            record.id,
            truncate_str(&record.name, 28),
            format_duration(record.duration),
            record.priority,
            record.state,
            truncate_str(record.description.as_deref().unwrap_or(""), 30),
        );
    }
}

/// Formats minutes the way tables show them
pub fn format_duration(minutes: f64) -> String {
    format!("{} min", minutes)
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncate_at = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(truncate_at).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordFields;

    fn record(name: &str, duration: f64, priority: Priority, state: State) -> Record {
        Record::new_task(RecordFields {
            name: name.to_string(),
            description: None,
            duration,
            priority,
            state,
        })
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Long", 60.0, Priority::Normal, State::Iniciada),
            record("Short done", 5.0, Priority::Urgente, State::Terminada),
            record("Short open", 10.0, Priority::Bajo, State::EnProceso),
        ]
    }

    fn names(view: &TableView<Record>) -> Vec<&str> {
        view.visible().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn build_view_uses_config_defaults() {
        let args = ListArgs {
            page: 1,
            ..Default::default()
        };
        let (view, policy) =
            build_view(&sample(), &args, &ProjectConfig::default(), &Catalog::standard()).unwrap();

        assert_eq!(policy, OrderPolicy::DurationFirst);
        assert_eq!(view.page().size, PageSize::Five);
        assert_eq!(names(&view), vec!["Short done", "Short open", "Long"]);
    }

    #[test]
    fn build_view_policy_override() {
        let args = ListArgs {
            page: 1,
            policy: Some("completion_first".to_string()),
            ..Default::default()
        };
        let (view, policy) =
            build_view(&sample(), &args, &ProjectConfig::default(), &Catalog::standard()).unwrap();

        assert_eq!(policy, OrderPolicy::CompletionFirst);
        assert_eq!(names(&view), vec!["Short open", "Long", "Short done"]);
    }

    #[test]
    fn build_view_filters_by_catalog_id() {
        let args = ListArgs {
            page: 1,
            priority: Some("1".to_string()),
            ..Default::default()
        };
        let (view, _) =
            build_view(&sample(), &args, &ProjectConfig::default(), &Catalog::standard()).unwrap();

        assert_eq!(names(&view), vec!["Short done"]);
    }

    #[test]
    fn build_view_rejects_bad_options() {
        let config = ProjectConfig::default();
        let catalog = Catalog::standard();

        let zero_page = ListArgs::default();
        assert!(build_view(&sample(), &zero_page, &config, &catalog).is_err());

        let bad_size = ListArgs {
            page: 1,
            page_size: Some(3),
            ..Default::default()
        };
        assert!(build_view(&sample(), &bad_size, &config, &catalog).is_err());

        let bad_policy = ListArgs {
            page: 1,
            policy: Some("random".to_string()),
            ..Default::default()
        };
        assert!(build_view(&sample(), &bad_policy, &config, &catalog).is_err());
    }

    #[test]
    fn edit_args_merge_over_record() {
        let existing = record("Old", 30.0, Priority::Normal, State::Iniciada);
        let edit = EditArgs {
            state: Some("Terminada".to_string()),
            ..Default::default()
        };
        assert!(!edit.is_empty());

        let draft = edit.merge_into(&existing);
        assert_eq!(draft.name, "Old");
        assert_eq!(draft.duration, "30");
        assert_eq!(draft.state, "Terminada");
    }

    #[test]
    fn json_reports_one_based_page() {
        let args = ListArgs {
            page: 1,
            ..Default::default()
        };
        let (view, policy) =
            build_view(&sample(), &args, &ProjectConfig::default(), &Catalog::standard()).unwrap();
        let json = view_json(&view, policy);

        assert_eq!(json["page"], 1);
        assert_eq!(json["pages"], 1);
        assert_eq!(json["total"], 3);
        assert_eq!(json["page_size"], 5);
        assert_eq!(json["policy"], "duration_first");
        assert_eq!(json["items"][0]["name"], "Short done");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(30.0), "30 min");
        assert_eq!(format_duration(2.5), "2.5 min");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }
}
