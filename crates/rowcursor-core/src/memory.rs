//! In-memory row source.
//!
//! Holds a fully materialized result set. Useful for tests, for drivers that
//! buffer whole results client-side, and for replaying rows loaded from files.

use std::convert::Infallible;

use crate::{Row, RowSource};

/// A `Vec<Row>`-backed [`RowSource`].
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<Row>,
    /// Index of the row the next fetch returns.
    position: usize,
}

impl MemoryRowSource {
    /// Creates a source over the given rows, positioned before the first.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, position: 0 }
    }

    /// Creates a source with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the index of the row the next fetch will return.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<Vec<Row>> for MemoryRowSource {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for MemoryRowSource {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RowSource for MemoryRowSource {
    type Error = Infallible;

    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error> {
        let row = self.rows.get(self.position).cloned();
        if row.is_some() {
            self.position += 1;
        }
        Ok(row)
    }

    fn total_rows(&self) -> Result<usize, Self::Error> {
        Ok(self.rows.len())
    }

    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error> {
        self.position = row_index.min(self.rows.len());
        Ok(self.rows.get(row_index).cloned())
    }
}
