#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/datagrid-widgets/")]

//! # datagrid-widgets
//!
//! Terminal data-grid components for record-keeping applications, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! ## Overview
//!
//! datagrid-widgets provides everything an administrative TUI needs to browse
//! a collection of records: a searchable, sortable, paginated grid with an
//! advanced filter builder, plus the supporting pieces (paginator, text
//! input, help footer, stopwatch) as standalone components. Each component
//! follows the Elm Architecture pattern with `init()`, `update()`, and
//! `view()` methods.
//!
//! ## Components
//!
//! - **[`grid`]**: the data grid — quick search, typed multi-field filters,
//!   column sort, pagination, and delegated row actions over any [`Row`] type
//! - **[`query`]**: the pure projection engine the grid is built on
//!   (text filtering, stable sorting, AND-combined filters, pagination)
//! - **[`paginator`]**: page tracking with arabic and dot-style rendering
//! - **[`textinput`]**: a single-line input with cursor editing
//! - **[`help`]**: a key-binding help footer driven by [`key::KeyMap`]
//! - **[`stopwatch`]**: an elapsed-time counter for session footers
//! - **[`source`]**: the [`RowSource`] abstraction for loading row data
//!
//! ## Quick start
//!
//! ```rust
//! use datagrid_widgets::prelude::*;
//!
//! #[derive(Clone)]
//! struct Patient {
//!     id: u32,
//!     name: String,
//!     age: i64,
//!     active: bool,
//! }
//!
//! impl Row for Patient {
//!     fn id(&self) -> String {
//!         self.id.to_string()
//!     }
//!
//!     fn field(&self, key: &str) -> CellValue {
//!         match key {
//!             "name" => self.name.as_str().into(),
//!             "age" => self.age.into(),
//!             "active" => self.active.into(),
//!             _ => CellValue::Null,
//!         }
//!     }
//! }
//!
//! let rows = vec![
//!     Patient { id: 1, name: "Ana Gomez".into(), age: 30, active: true },
//!     Patient { id: 2, name: "Bruno Diaz".into(), age: 45, active: false },
//! ];
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("age", "Age").sortable(),
//!     Column::new("active", "Active"),
//! ];
//!
//! let grid = Grid::new(rows, columns, 80, 24)
//!     .with_title("Patients")
//!     .with_per_page(10);
//! assert!(grid.render().contains("Ana Gomez"));
//! ```
//!
//! ## The projection pipeline
//!
//! The grid never mutates the rows it is given. Every keystroke derives the
//! displayed page from scratch: advanced filters first, then the quick text
//! search, then the column sort, then pagination. The pipeline functions in
//! [`query`] are plain and usable on their own:
//!
//! ```rust
//! use datagrid_widgets::query::{
//!     filter_by_text, paginate, sort_rows, CellValue, Row, SortDirection,
//! };
//!
//! #[derive(Clone)]
//! struct Entry(&'static str);
//!
//! impl Row for Entry {
//!     fn id(&self) -> String {
//!         self.0.to_string()
//!     }
//!     fn field(&self, _key: &str) -> CellValue {
//!         self.0.into()
//!     }
//! }
//!
//! let rows = vec![Entry("Ana"), Entry("Bruno"), Entry("Mariana")];
//! let hits = filter_by_text(&rows, "ana", &["name"]);
//! assert_eq!(hits.len(), 2);
//!
//! let sorted = sort_rows(&hits, Some("name"), SortDirection::Descending);
//! let page = paginate(&sorted, 1, 10);
//! assert_eq!(page.total_pages, 1);
//! ```
//!
//! ## Row actions
//!
//! The grid is a presentation component. View, add, edit, delete, export,
//! and import keys notify the caller through [`GridDelegate`] hooks, which
//! may return commands for the runtime. See the [`grid`] module docs.

pub mod grid;
pub mod help;
pub mod key;
pub mod paginator;
pub mod query;
pub mod source;
pub mod stopwatch;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Standardized focus management for input components.
///
/// Components that accept keyboard input implement this trait so that
/// applications can move focus between them uniformly. `focus` may return a
/// command (a cursor blink timer, for example) for the runtime to execute.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use grid::{
    BuilderEvent, Column, GridDelegate, GridKeyMap, GridState, GridStyles, Model as Grid,
    NoopDelegate, RenderFn,
};
pub use help::Model as HelpModel;
pub use key::{matches as key_matches, Binding, KeyMap, KeyPress};
pub use paginator::Model as Paginator;
pub use query::{
    apply_filters, filter_by_text, paginate, sort_rows, CellValue, FilterOp, FilterValue,
    PageView, Row, SearchFilter, SortDirection, SortState,
};
pub use source::{RowSource, VecSource};
pub use stopwatch::Model as Stopwatch;
pub use textinput::{new as textinput_new, Model as TextInput};

/// Convenient re-exports for the common use cases.
///
/// ```rust
/// use datagrid_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::grid::{
        Column, GridDelegate, GridState, GridStyles, Model as Grid, NoopDelegate,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::Model as Paginator;
    pub use crate::query::{
        CellValue, FilterOp, FilterValue, Row, SearchFilter, SortDirection, SortState,
    };
    pub use crate::source::{RowSource, VecSource};
    pub use crate::stopwatch::Model as Stopwatch;
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::Component;
}
