//! Filtering and pagination of an already ordered list
//!
//! A record is visible when it passes every active criterion:
//! - `search`: case-insensitive substring of the name (empty matches all)
//! - `priority`: exact label equality (`None` matches all)
//! - `state`: exact label equality (`None` matches all)
//!
//! The matches are then cut into pages. Requesting a page past the end
//! yields an empty window, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::label::{Priority, State};
use super::record::TaskLike;

#[derive(Debug, Error, PartialEq)]
#[error("Invalid page size {0} (allowed: 5, 10, 25)")]
pub struct InvalidPageSize(pub usize);

/// Allowed number of rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    /// Returns the number of rows
    pub fn get(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The three independent filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub priority: Option<Priority>,
    pub state: Option<State>,
}

impl FilterCriteria {
    /// Returns true if no criterion is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.priority.is_none() && self.state.is_none()
    }

    /// Returns true if the record satisfies every active criterion
    pub fn matches<T: TaskLike + ?Sized>(&self, item: &T) -> bool {
        self.matches_search(item.name())
            && self.priority.as_ref().map_or(true, |p| p == item.priority())
            && self.state.as_ref().map_or(true, |s| s == item.state())
    }

    fn matches_search(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search.to_lowercase())
    }
}

/// A zero-based page request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: PageSize,
}

impl Page {
    pub fn new(index: usize, size: PageSize) -> Self {
        Self { index, size }
    }

    /// Offset of the first row on this page
    pub fn start(&self) -> usize {
        self.index.saturating_mul(self.size.get())
    }
}

/// The rows to render plus the total number of matches
#[derive(Debug, Clone, PartialEq)]
pub struct Window<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: Page,
}

impl<T> Window<T> {
    /// Number of pages needed for all matches (at least 1)
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page.size.get()).max(1)
    }

    /// One-based, inclusive bounds of the visible rows, or `None` if empty
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.page.start() + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters `items` by `criteria` and returns the requested page
pub fn visible_window<T: TaskLike + Clone>(
    items: &[T],
    criteria: &FilterCriteria,
    page: Page,
) -> Window<T> {
    let matches: Vec<&T> = items.iter().filter(|item| criteria.matches(*item)).collect();
    let total = matches.len();

    let visible = matches
        .into_iter()
        .skip(page.start())
        .take(page.size.get())
        .cloned()
        .collect();

    Window {
        items: visible,
        total,
        page,
    }
}
