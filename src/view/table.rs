//! Table view controller
//!
//! Holds the live search/filter/page selections for one table and keeps the
//! visible window in sync with them. Editing any filter or the page size
//! jumps back to the first page; moving between pages keeps the filters.

use crate::domain::{visible_window, FilterCriteria, Page, PageSize, Priority, State, TaskLike, Window};

/// Selection state plus the window it produces
#[derive(Debug, Clone)]
pub struct TableView<T> {
    items: Vec<T>,
    criteria: FilterCriteria,
    page: Page,
    window: Window<T>,
}

impl<T: TaskLike + Clone> TableView<T> {
    /// Creates a view over `items` showing the first page of the given size
    pub fn new(items: Vec<T>, page_size: PageSize) -> Self {
        let criteria = FilterCriteria::default();
        let page = Page::new(0, page_size);
        let window = visible_window(&items, &criteria, page);
        Self {
            items,
            criteria,
            page,
            window,
        }
    }

    /// Replaces the underlying items, keeping every selection
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.reset_page();
    }

    pub fn set_priority_filter(&mut self, priority: Option<Priority>) {
        self.criteria.priority = priority;
        self.reset_page();
    }

    pub fn set_state_filter(&mut self, state: Option<State>) {
        self.criteria.state = state;
        self.reset_page();
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page.size = size;
        self.reset_page();
    }

    /// Moves to a zero-based page without touching the filters
    pub fn set_page(&mut self, index: usize) {
        self.page.index = index;
        self.recompute();
    }

    /// Moves forward one page if there is one
    pub fn next_page(&mut self) -> bool {
        if self.page.index < self.window.page_count().saturating_sub(1) {
            self.set_page(self.page.index + 1);
            true
        } else {
            false
        }
    }

    /// Moves back one page if there is one
    pub fn prev_page(&mut self) -> bool {
        if self.page.index > 0 {
            self.set_page(self.page.index - 1);
            true
        } else {
            false
        }
    }

    /// The record rendered at a visible row, for opening an edit flow
    pub fn select(&self, row: usize) -> Option<&T> {
        self.window.items.get(row)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn window(&self) -> &Window<T> {
        &self.window
    }

    /// Rows on the current page
    pub fn visible(&self) -> &[T] {
        &self.window.items
    }

    /// Number of records matching the filters, across all pages
    pub fn total(&self) -> usize {
        self.window.total
    }

    fn reset_page(&mut self) {
        self.page.index = 0;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.window = visible_window(&self.items, &self.criteria, self.page);
    }
}
