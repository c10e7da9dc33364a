//! Row sources for exercising cursor behavior.

use std::cell::Cell;

use rowcursor_core::{MemoryRowSource, Row, RowSource};
use thiserror::Error;

/// Errors raised by [`FailingRowSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Simulated connection loss while fetching a row.
    #[error("connection lost while fetching row {0}")]
    ConnectionLost(usize),

    /// Simulated failure while counting rows.
    #[error("row count unavailable")]
    CountUnavailable,

    /// Simulated failure while seeking.
    #[error("seek to row {0} failed")]
    SeekFailed(usize),
}

/// Number of calls made into a [`CountingRowSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// `fetch_next` calls.
    pub fetches: usize,
    /// `total_rows` calls.
    pub totals: usize,
    /// `seek` calls.
    pub seeks: usize,
}

/// Wraps a memory source and counts every driver call.
#[derive(Debug, Default)]
pub struct CountingRowSource {
    inner: MemoryRowSource,
    fetches: usize,
    // total_rows takes &self
    totals: Cell<usize>,
    seeks: usize,
}

impl CountingRowSource {
    /// Creates a counting source over `rows`.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            inner: MemoryRowSource::new(rows),
            ..Default::default()
        }
    }

    /// Returns the call counts so far.
    pub fn counts(&self) -> CallCounts {
        CallCounts {
            fetches: self.fetches,
            totals: self.totals.get(),
            seeks: self.seeks,
        }
    }
}

impl RowSource for CountingRowSource {
    type Error = std::convert::Infallible;

    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error> {
        self.fetches += 1;
        self.inner.fetch_next()
    }

    fn total_rows(&self) -> Result<usize, Self::Error> {
        self.totals.set(self.totals.get() + 1);
        self.inner.total_rows()
    }

    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error> {
        self.seeks += 1;
        self.inner.seek(row_index)
    }
}

/// A source that fails on demand.
#[derive(Debug, Default)]
pub struct FailingRowSource {
    inner: MemoryRowSource,
    fail_fetch_at: Option<usize>,
    fail_total: bool,
    fail_seek: bool,
}

impl FailingRowSource {
    /// Creates a source over `rows` that does not fail yet.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            inner: MemoryRowSource::new(rows),
            ..Default::default()
        }
    }

    /// Fails the fetch that would return row `row_index`.
    #[must_use]
    pub fn fail_fetch_at(mut self, row_index: usize) -> Self {
        self.fail_fetch_at = Some(row_index);
        self
    }

    /// Fails every `total_rows` call.
    #[must_use]
    pub fn fail_total(mut self) -> Self {
        self.fail_total = true;
        self
    }

    /// Fails every `seek` call.
    #[must_use]
    pub fn fail_seek(mut self) -> Self {
        self.fail_seek = true;
        self
    }

    /// Clears every injected failure. The source keeps its position.
    pub fn recover(&mut self) {
        self.fail_fetch_at = None;
        self.fail_total = false;
        self.fail_seek = false;
    }
}

impl RowSource for FailingRowSource {
    type Error = SourceError;

    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error> {
        let position = self.inner.position();
        if self.fail_fetch_at == Some(position) {
            return Err(SourceError::ConnectionLost(position));
        }
        Ok(self.inner.fetch_next().unwrap_or_else(|never| match never {}))
    }

    fn total_rows(&self) -> Result<usize, Self::Error> {
        if self.fail_total {
            return Err(SourceError::CountUnavailable);
        }
        Ok(self.inner.total_rows().unwrap_or_else(|never| match never {}))
    }

    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error> {
        if self.fail_seek {
            return Err(SourceError::SeekFailed(row_index));
        }
        Ok(self.inner.seek(row_index).unwrap_or_else(|never| match never {}))
    }
}
