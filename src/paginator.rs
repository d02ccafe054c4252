//! Pagination state and indicator rendering for the grid.
//!
//! This component tracks which page is visible and renders the pagination
//! control; it never slices row data itself (the grid uses
//! [`crate::query::paginate`] for that).
//!
//! Pages are 1-indexed to match the public paging contract: `page` stays in
//! `[1, max(1, total_pages)]`, and `total_pages` is 0 while the collection is
//! empty. When the collection shrinks below the current page, the page is
//! clamped to the last valid one.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// How the pagination indicator is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals, e.g. "2/5".
    #[default]
    Arabic,
    /// One dot per page, e.g. "○ • ○ ○ ○".
    Dots,
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Pagination state: current page, page size, and total pages.
///
/// # Examples
///
/// ```
/// use datagrid_widgets::paginator::Model;
///
/// let mut pager = Model::new().with_per_page(10).with_total_items(35);
/// assert_eq!(pager.total_pages, 4);
/// assert_eq!(pager.page, 1);
///
/// pager.next_page();
/// assert_eq!(pager.page, 2);
///
/// // Shrinking the collection clamps the page.
/// pager.page = 4;
/// pager.set_total_items(12);
/// assert_eq!(pager.page, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Indicator render mode.
    pub paginator_type: Type,
    /// Current page, 1-indexed.
    pub page: usize,
    /// Items per page; always at least 1.
    pub per_page: usize,
    /// Total pages; 0 while the collection is empty.
    pub total_pages: usize,

    /// Glyph for the active page in dots mode.
    pub active_dot: String,
    /// Glyph for inactive pages in dots mode.
    pub inactive_dot: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 0,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern); values below 1 clamp to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total item count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size; values below 1 clamp to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recalculates total pages from an item count and clamps the current
    /// page back into range.
    ///
    /// Zero items leaves zero pages; the current page then rests at 1 so the
    /// next non-empty recalculation starts from the first page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page);
        self.page = self.page.clamp(1, self.total_pages.max(1));
    }

    /// Slice bounds `[start, end)` of the current page for a collection of
    /// `length` items.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page - 1) * self.per_page;
        let start = start.min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Moves to the previous page, stopping at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Moves to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Whether the first page is current.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Whether the last page is current (vacuously true when empty).
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Handles prev/next key presses.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the pagination indicator.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        let current = self.page.min(self.total_pages);
        format!("{}/{}", current, self.total_pages)
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for p in 1..=self.total_pages {
            if p > 1 {
                s.push(' ');
            }
            if p == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
        }
        s
    }
}
