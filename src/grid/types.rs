//! Core types and traits for the grid component: column descriptors, the
//! caller-hook delegate, and the interaction state enum.

use crate::query::{CellValue, Row, SearchFilter};
use bubbletea_rs::Cmd;

/// Custom cell renderer: receives the raw value and the full row, returns the
/// display string (which may carry ANSI styling).
pub type RenderFn<R> = Box<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// Declarative description of one displayed attribute.
///
/// A column says which row field it shows, how it is labeled, whether it can
/// be sorted, and optionally how wide it is and how its cells render. When no
/// renderer is supplied the grid applies default coercions (yes/no badges for
/// booleans, formatted dates, a placeholder for null).
///
/// # Examples
///
/// ```
/// use datagrid_widgets::grid::Column;
/// use datagrid_widgets::query::{CellValue, Row};
///
/// # #[derive(Clone)]
/// # struct Patient;
/// # impl Row for Patient {
/// #     fn id(&self) -> String { "1".into() }
/// #     fn field(&self, _: &str) -> CellValue { CellValue::Null }
/// # }
/// let name: Column<Patient> = Column::new("name", "Name").sortable();
/// let age: Column<Patient> = Column::new("age", "Age").sortable().with_width(5);
/// let status: Column<Patient> = Column::new("active", "Active")
///     .with_render(|value, _row| format!("[{}]", value));
/// # let _ = (name, age, status);
/// ```
pub struct Column<R: Row> {
    /// Row field key this column displays.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether sort requests on this column are honored.
    pub sortable: bool,
    /// Fixed display width in cells; `None` sizes to content.
    pub width: Option<usize>,
    render: Option<RenderFn<R>>,
}

impl<R: Row> Column<R> {
    /// Creates a column for `key` with the given header label.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Fixes the display width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Installs a custom cell renderer.
    pub fn with_render<F>(mut self, f: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Box::new(f));
        self
    }

    /// The custom renderer, if one was installed.
    pub fn renderer(&self) -> Option<&RenderFn<R>> {
        self.render.as_ref()
    }
}

/// Caller hooks invoked on user actions.
///
/// The grid is a pure presentation component: it never adds, edits, deletes,
/// exports, or imports anything itself. Each hook is a notification carrying
/// the affected row (or applied filters) and may return a command for the
/// runtime; all hooks default to no-ops.
pub trait GridDelegate<R: Row> {
    /// The user requested to view the row.
    fn on_view(&self, _row: &R) -> Option<Cmd> {
        None
    }

    /// The user requested to edit the row.
    fn on_edit(&self, _row: &R) -> Option<Cmd> {
        None
    }

    /// The user requested to delete the row.
    fn on_delete(&self, _row: &R) -> Option<Cmd> {
        None
    }

    /// The user requested to create a new record.
    fn on_add(&self) -> Option<Cmd> {
        None
    }

    /// The user requested an export of the current collection.
    fn on_export(&self) -> Option<Cmd> {
        None
    }

    /// The user requested an import.
    fn on_import(&self) -> Option<Cmd> {
        None
    }

    /// A set of advanced filters was applied.
    fn on_search(&self, _filters: &[SearchFilter]) -> Option<Cmd> {
        None
    }

    /// Filters and the quick query were cleared.
    fn on_clear(&self) -> Option<Cmd> {
        None
    }
}

/// Delegate that ignores every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl<R: Row> GridDelegate<R> for NoopDelegate {}

/// The grid's interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridState {
    /// Normal navigation over rows and columns.
    #[default]
    Browsing,
    /// The quick-search input has focus; results filter live.
    Searching,
    /// The advanced filter builder is open.
    Building,
}
