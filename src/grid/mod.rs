//! An interactive data grid for browsing record collections.
//!
//! The grid combines five concerns that administrative tools need together:
//!
//! - **Quick search**: `/` focuses a text input that filters rows live,
//!   case-insensitively, across the declared searchable fields.
//! - **Advanced filters**: `f` opens a builder that composes typed
//!   field/operator/value conditions; applied filters combine with AND.
//! - **Column sort**: `s` sorts by the selected column, toggling direction
//!   on repeat. The sort is stable in both directions.
//! - **Pagination**: the projection pages through [`crate::paginator`].
//! - **Row actions**: view, add, edit, delete, export, and import keys
//!   notify the caller through [`GridDelegate`] hooks; the grid itself never
//!   mutates the collection.
//!
//! # Example
//!
//! ```
//! use datagrid_widgets::grid::{Column, Model};
//! use datagrid_widgets::query::{CellValue, Row};
//!
//! #[derive(Clone)]
//! struct Patient {
//!     id: u32,
//!     name: String,
//!     age: i64,
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
//!             _ => CellValue::Null,
//!         }
//!     }
//! }
//!
//! let rows = vec![Patient { id: 1, name: "Ana Gomez".into(), age: 30 }];
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("age", "Age").sortable(),
//! ];
//! let grid = Model::new(rows, columns, 80, 24).with_title("Patients");
//! assert!(grid.render().contains("Ana Gomez"));
//! ```

mod keys;
mod model;
mod rendering;
pub mod search;
mod style;
mod types;

pub use keys::GridKeyMap;
pub use model::Model;
pub use search::{BuilderEvent, BuilderKeyMap};
pub use style::{GridStyles, ELLIPSIS, NULL_PLACEHOLDER};
pub use types::{Column, GridDelegate, GridState, NoopDelegate, RenderFn};
