//! Key bindings for grid navigation, sorting, searching, and row actions.
//!
//! Navigation follows the usual terminal conventions: arrows or `j`/`k` for
//! rows, `h`/`l` for column selection, PageUp/PageDown for pages. `/` opens
//! the quick search, `f` the advanced filter builder, `c` clears all
//! filtering. Row actions mirror the caller hooks: Enter view, `a` add,
//! `e` edit, `d` delete, `x` export, `i` import.

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for the grid component.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Move the row cursor up.
    pub cursor_up: key::Binding,
    /// Move the row cursor down.
    pub cursor_down: key::Binding,
    /// Select the previous column.
    pub prev_column: key::Binding,
    /// Select the next column.
    pub next_column: key::Binding,
    /// Sort by the selected column (toggle direction when already sorted).
    pub sort: key::Binding,
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Jump to the first row of the page.
    pub go_to_start: key::Binding,
    /// Jump to the last row of the page.
    pub go_to_end: key::Binding,
    /// Focus the quick-search input.
    pub search: key::Binding,
    /// Accept the quick search and return to browsing.
    pub accept_search: key::Binding,
    /// Cancel the quick search, restoring the unfiltered view.
    pub cancel_search: key::Binding,
    /// Open the advanced filter builder.
    pub open_builder: key::Binding,
    /// Clear the quick query and all advanced filters.
    pub clear_filters: key::Binding,
    /// View the selected row.
    pub view_row: key::Binding,
    /// Add a new record.
    pub add_row: key::Binding,
    /// Edit the selected row.
    pub edit_row: key::Binding,
    /// Delete the selected row.
    pub delete_row: key::Binding,
    /// Export the collection.
    pub export: key::Binding,
    /// Import records.
    pub import: key::Binding,
    /// Toggle the expanded help view.
    pub show_full_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            prev_column: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev column"),
            next_column: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next column"),
            sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            prev_page: key::Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            next_page: key::Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "apply"),
            cancel_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            open_builder: key::Binding::new(vec![KeyCode::Char('f')]).with_help("f", "filters"),
            clear_filters: key::Binding::new(vec![KeyCode::Char('c')]).with_help("c", "clear"),
            view_row: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "view"),
            add_row: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "add"),
            edit_row: key::Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            delete_row: key::Binding::new(vec![KeyCode::Char('d')]).with_help("d", "delete"),
            export: key::Binding::new(vec![KeyCode::Char('x')]).with_help("x", "export"),
            import: key::Binding::new(vec![KeyCode::Char('i')]).with_help("i", "import"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: key::Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q", "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key: code, modifiers }
    }

    #[test]
    fn default_map_constructs_with_all_bindings_enabled() {
        let map = GridKeyMap::default();
        assert!(!map.cursor_up.is_disabled());
        assert!(map.sort.matches(&key(KeyCode::Char('s'), KeyModifiers::NONE)));
        assert!(map.search.matches(&key(KeyCode::Char('/'), KeyModifiers::NONE)));
    }

    #[test]
    fn quit_matches_both_plain_q_and_ctrl_c() {
        let map = GridKeyMap::default();
        assert!(map.quit.matches(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(map.quit.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!map.quit.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
