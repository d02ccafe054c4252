//! The grid model: state, input handling, and the projection pipeline.

use super::keys::GridKeyMap;
use super::search::{self, BuilderEvent};
use super::style::GridStyles;
use super::types::{Column, GridDelegate, GridState, NoopDelegate};
use crate::query::{
    apply_filters, filter_by_text, paginate, sort_rows, PageView, Row, SearchFilter, SortState,
};
use crate::source::RowSource;
use crate::{help, key, paginator, textinput, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

const DEFAULT_PER_PAGE: usize = 10;

/// A data grid over any [`Row`] type.
///
/// The grid owns the full row collection and derives what it shows through a
/// fixed pipeline: advanced filters, then the quick text search, then the
/// column sort, then pagination. The source collection is never mutated;
/// every keystroke recomputes the projection from scratch.
///
/// Row actions (view, edit, delete, add, export, import) are delegated to
/// the caller through [`GridDelegate`] hooks.
pub struct Model<R: Row> {
    /// Title shown above the grid.
    pub title: String,
    pub(crate) rows: Vec<R>,
    pub(crate) columns: Vec<Column<R>>,
    search_fields: Vec<String>,
    delegate: Box<dyn GridDelegate<R> + Send + Sync>,
    pub(crate) state: GridState,
    pub(crate) search_input: textinput::Model,
    pub(crate) query: String,
    pub(crate) filters: Vec<SearchFilter>,
    pub(crate) sort: SortState,
    /// Page tracking and pagination rendering.
    pub paginator: paginator::Model,
    pub(crate) cursor: usize,
    pub(crate) active_column: usize,
    pub(crate) visible: Vec<R>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// Visual styles.
    pub styles: GridStyles,
    /// Key bindings.
    pub keymap: GridKeyMap,
    /// Help footer renderer.
    pub help: help::Model,
    pub(crate) builder: search::Model,
    /// Whether the status bar (row counts, active filters) is rendered.
    pub show_status_bar: bool,
}

impl<R: Row> Model<R> {
    /// Creates a grid over `rows` with the given columns and dimensions.
    ///
    /// Every column key is text-searchable by default; narrow the set with
    /// [`with_search_fields`](Self::with_search_fields).
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>, width: usize, height: usize) -> Self {
        let search_fields: Vec<String> = columns.iter().map(|c| c.key.clone()).collect();

        let mut search_input = textinput::new();
        search_input.prompt = "Search: ".to_string();
        search_input.set_placeholder("type to filter...");

        let mut model = Self {
            title: String::new(),
            rows,
            columns,
            builder: search::Model::new(search_fields.clone()),
            search_fields,
            delegate: Box::new(NoopDelegate),
            state: GridState::Browsing,
            search_input,
            query: String::new(),
            filters: Vec::new(),
            sort: SortState::default(),
            paginator: paginator::Model::new().with_per_page(DEFAULT_PER_PAGE),
            cursor: 0,
            active_column: 0,
            visible: Vec::new(),
            width,
            height,
            styles: GridStyles::default(),
            keymap: GridKeyMap::default(),
            help: help::Model::new().with_width(width),
            show_status_bar: true,
        };
        model.refresh();
        model
    }

    /// Installs the caller's action hooks.
    pub fn with_delegate(mut self, delegate: impl GridDelegate<R> + Send + Sync + 'static) -> Self {
        self.delegate = Box::new(delegate);
        self
    }

    /// Sets the grid title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Restricts the quick text search to the given field keys.
    pub fn with_search_fields(mut self, fields: Vec<String>) -> Self {
        self.builder = search::Model::new(fields.clone());
        self.search_fields = fields;
        self.refresh();
        self
    }

    /// Sets the page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.paginator.set_per_page(per_page);
        self.refresh();
        self
    }

    /// Replaces the row collection, keeping filters, sort, and page where
    /// they remain valid.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh();
    }

    /// Replaces the row collection from a [`RowSource`].
    pub fn load(&mut self, source: &dyn RowSource<R>) {
        self.set_rows(source.fetch_rows());
    }

    /// The grid's current interaction state.
    pub fn state(&self) -> GridState {
        self.state
    }

    /// The accepted quick-search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The applied advanced filters.
    pub fn filters(&self) -> &[SearchFilter] {
        &self.filters
    }

    /// The current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Index of the selected column.
    pub fn active_column(&self) -> usize {
        self.active_column
    }

    /// Cursor position within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row count after filtering, before pagination.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The advanced filter builder.
    pub fn builder(&self) -> &search::Model {
        &self.builder
    }

    /// The current page of the projection.
    pub fn page_view(&self) -> PageView<R> {
        paginate(&self.visible, self.paginator.page, self.paginator.per_page)
    }

    /// The row under the cursor, if any.
    pub fn selected_row(&self) -> Option<&R> {
        let (start, end) = self.paginator.slice_bounds(self.visible.len());
        self.visible.get(start + self.cursor.min(end.saturating_sub(start + 1)))
    }

    /// Recomputes the projection: filters, then quick search, then sort.
    ///
    /// Also re-clamps the page and cursor so a shrinking projection never
    /// leaves either pointing past the end.
    pub fn refresh(&mut self) {
        let filtered = apply_filters(&self.rows, &self.filters);
        let searched = filter_by_text(&filtered, &self.query, &self.search_fields);
        self.visible = sort_rows(&searched, self.sort.field.as_deref(), self.sort.direction);

        self.paginator.set_total_items(self.visible.len());
        let on_page = self.paginator.items_on_page(self.visible.len());
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
    }

    /// Handles one runtime message.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.height = size.height as usize;
            self.help.width = self.width;
            return None;
        }

        match self.state {
            GridState::Building => self.update_building(msg),
            GridState::Searching => self.update_searching(msg),
            GridState::Browsing => self.update_browsing(msg),
        }
    }

    fn update_building(&mut self, msg: &Msg) -> Option<Cmd> {
        let event = self.builder.update(msg);
        if !self.builder.is_open() {
            self.state = GridState::Browsing;
        }
        match event {
            Some(BuilderEvent::Applied(filters)) => {
                self.filters = filters;
                self.cursor = 0;
                self.refresh();
                self.delegate.on_search(&self.filters)
            }
            Some(BuilderEvent::Cleared) => {
                self.filters.clear();
                self.query.clear();
                self.search_input.reset();
                self.cursor = 0;
                self.refresh();
                self.delegate.on_clear()
            }
            None => None,
        }
    }

    fn update_searching(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.accept_search.matches(key_msg) {
                self.search_input.blur();
                self.state = GridState::Browsing;
                return None;
            }
            if self.keymap.cancel_search.matches(key_msg) {
                self.search_input.reset();
                self.search_input.blur();
                self.query.clear();
                self.state = GridState::Browsing;
                self.refresh();
                return None;
            }
        }

        // Live filtering: every edit reruns the projection.
        let cmd = self.search_input.update(msg);
        let value = self.search_input.value();
        if value != self.query {
            self.query = value;
            self.cursor = 0;
            self.refresh();
        }
        cmd
    }

    fn update_browsing(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
            return None;
        }
        if self.keymap.cursor_down.matches(key_msg) {
            let on_page = self.paginator.items_on_page(self.visible.len());
            if self.cursor + 1 < on_page {
                self.cursor += 1;
            }
            return None;
        }
        if self.keymap.prev_column.matches(key_msg) {
            self.active_column = self.active_column.saturating_sub(1);
            return None;
        }
        if self.keymap.next_column.matches(key_msg) {
            if self.active_column + 1 < self.columns.len() {
                self.active_column += 1;
            }
            return None;
        }
        if self.keymap.sort.matches(key_msg) {
            if let Some(column) = self.columns.get(self.active_column) {
                if column.sortable {
                    let key = column.key.clone();
                    self.sort.toggle(&key);
                    self.refresh();
                }
            }
            return None;
        }
        if self.keymap.prev_page.matches(key_msg) {
            self.paginator.prev_page();
            self.clamp_cursor();
            return None;
        }
        if self.keymap.next_page.matches(key_msg) {
            self.paginator.next_page();
            self.clamp_cursor();
            return None;
        }
        if self.keymap.go_to_start.matches(key_msg) {
            self.cursor = 0;
            return None;
        }
        if self.keymap.go_to_end.matches(key_msg) {
            self.cursor = self
                .paginator
                .items_on_page(self.visible.len())
                .saturating_sub(1);
            return None;
        }
        if self.keymap.search.matches(key_msg) {
            self.state = GridState::Searching;
            return self.search_input.focus();
        }
        if self.keymap.open_builder.matches(key_msg) {
            self.builder.open();
            self.state = GridState::Building;
            return None;
        }
        if self.keymap.clear_filters.matches(key_msg) {
            self.filters.clear();
            self.query.clear();
            self.search_input.reset();
            self.builder.clear_all();
            self.sort.clear();
            self.cursor = 0;
            self.refresh();
            return self.delegate.on_clear();
        }
        if self.keymap.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
            return None;
        }
        if self.keymap.view_row.matches(key_msg) {
            if let Some(row) = self.selected_row() {
                let row = row.clone();
                return self.delegate.on_view(&row);
            }
            return None;
        }
        if self.keymap.edit_row.matches(key_msg) {
            if let Some(row) = self.selected_row() {
                let row = row.clone();
                return self.delegate.on_edit(&row);
            }
            return None;
        }
        if self.keymap.delete_row.matches(key_msg) {
            if let Some(row) = self.selected_row() {
                let row = row.clone();
                return self.delegate.on_delete(&row);
            }
            return None;
        }
        if self.keymap.add_row.matches(key_msg) {
            return self.delegate.on_add();
        }
        if self.keymap.export.matches(key_msg) {
            return self.delegate.on_export();
        }
        if self.keymap.import.matches(key_msg) {
            return self.delegate.on_import();
        }
        None
    }

    fn clamp_cursor(&mut self) {
        let on_page = self.paginator.items_on_page(self.visible.len());
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
    }
}

impl<R: Row> key::KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        match self.state {
            GridState::Searching => {
                vec![&self.keymap.accept_search, &self.keymap.cancel_search]
            }
            GridState::Building => crate::key::KeyMap::short_help(&self.builder.keymap),
            GridState::Browsing => vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.search,
                &self.keymap.open_builder,
                &self.keymap.quit,
                &self.keymap.show_full_help,
            ],
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.prev_column,
                &self.keymap.next_column,
                &self.keymap.prev_page,
                &self.keymap.next_page,
                &self.keymap.go_to_start,
                &self.keymap.go_to_end,
            ],
            vec![
                &self.keymap.search,
                &self.keymap.open_builder,
                &self.keymap.clear_filters,
                &self.keymap.sort,
            ],
            vec![
                &self.keymap.view_row,
                &self.keymap.add_row,
                &self.keymap.edit_row,
                &self.keymap.delete_row,
                &self.keymap.export,
                &self.keymap.import,
            ],
            vec![&self.keymap.show_full_help, &self.keymap.quit],
        ]
    }
}

impl<R: Row + Send + Sync + 'static> BubbleTeaModel for Model<R> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), Vec::new(), 80, 24), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg)
    }

    fn view(&self) -> String {
        self.render()
    }
}
