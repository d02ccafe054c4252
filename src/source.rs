//! Pluggable row providers for the grid.
//!
//! The grid never fetches data itself; callers hand it rows from anything
//! implementing [`RowSource`]. In a real application the source wraps a REST
//! client or database; in demos and tests an in-memory [`VecSource`] stands
//! in.

use crate::query::Row;

/// Capability to produce the rows a grid displays.
pub trait RowSource<R: Row> {
    /// Returns the current collection, in display order.
    fn fetch_rows(&self) -> Vec<R>;
}

/// In-memory source backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct VecSource<R: Row> {
    rows: Vec<R>,
}

impl<R: Row> VecSource<R> {
    /// Wraps an existing collection.
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Appends a row.
    pub fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Number of rows held.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Row> RowSource<R> for VecSource<R> {
    fn fetch_rows(&self) -> Vec<R> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry(u32);

    impl Row for Entry {
        fn id(&self) -> String {
            self.0.to_string()
        }

        fn field(&self, _key: &str) -> CellValue {
            CellValue::Int(self.0 as i64)
        }
    }

    #[test]
    fn vec_source_round_trips_rows() {
        let mut source = VecSource::new(vec![Entry(1), Entry(2)]);
        source.push(Entry(3));
        assert_eq!(source.len(), 3);
        assert_eq!(source.fetch_rows(), vec![Entry(1), Entry(2), Entry(3)]);
    }
}
