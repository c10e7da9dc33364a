//! Forward-only cursor over a [`RowSource`].
//!
//! The cursor owns all iteration state for one executed query:
//!
//! - the cached current row (or the end-of-results marker),
//! - the zero-based index of the last produced row (`-1` before any),
//! - whether iteration has started.
//!
//! # State machine
//!
//! ```text
//!            advance                 advance (source returns None)
//!   Fresh ─────────────▶ Positioned ───────────────────────────▶ Exhausted
//!     ▲                   │   ▲ advance                              │
//!     │                   └───┘                                      │
//!     └────────────── rewind (only if started and total_rows > 0) ◀──┘
//! ```
//!
//! `current()` and `has_current()` pull one row lazily from `Fresh`; from
//! `Positioned` or `Exhausted` they only read the cache. Rewinding is always
//! explicit: a second pass without `rewind()` continues from wherever the
//! first pass stopped, which after exhaustion means no rows.

use tracing::{debug, trace};

use crate::error::{CursorError, CursorResult};
use crate::{Row, RowSource};

/// Observable cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No row has been requested since creation or the last rewind.
    Fresh,
    /// A row has been produced and is cached.
    Positioned,
    /// The source reported end-of-results.
    Exhausted,
}

/// A forward-only, rewindable cursor over query results.
///
/// The cursor borrows its source for its whole lifetime and never recreates
/// it. It is not meant to be shared between threads; callers needing
/// concurrent access must serialize it themselves.
#[derive(Debug)]
pub struct ResultCursor<'s, S: RowSource + ?Sized> {
    /// The driver-supplied row source.
    source: &'s mut S,
    /// Cached current row. `None` after start means end-of-results.
    current: Option<Row>,
    /// Ordinal of the last produced row, or -1.
    row_index: i64,
    /// Whether any row has been requested from the source.
    started: bool,
}

impl<'s, S: RowSource + ?Sized> ResultCursor<'s, S> {
    /// Creates a fresh cursor over `source`.
    pub fn new(source: &'s mut S) -> Self {
        Self {
            source,
            current: None,
            row_index: -1,
            started: false,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> CursorState {
        match (self.started, &self.current) {
            (false, _) => CursorState::Fresh,
            (true, Some(_)) => CursorState::Positioned,
            (true, None) => CursorState::Exhausted,
        }
    }

    /// Returns true once any row has been requested.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the ordinal of the last produced row, or -1 before any.
    pub fn index(&self) -> i64 {
        self.row_index
    }

    /// Returns a shared reference to the underlying source.
    pub fn source(&self) -> &S {
        &*self.source
    }

    /// Fetches the next row into the cache and returns it with its index.
    ///
    /// On a source failure the cursor state is left untouched, so a fresh
    /// cursor stays fresh and the next access retries the fetch.
    pub(crate) fn pull(&mut self) -> CursorResult<Option<(i64, &Row)>, S::Error> {
        let next = self.source.fetch_next().map_err(CursorError::Source)?;
        self.started = true;
        self.row_index += 1;

        match &next {
            Some(row) => trace!(row_index = self.row_index, columns = row.len(), "fetched row"),
            None => debug!(row_index = self.row_index, "row source exhausted"),
        }

        self.current = next;
        let index = self.row_index;
        Ok(self.current.as_ref().map(|row| (index, row)))
    }

    /// Fetches the next row, caches it and returns it.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    pub fn advance(&mut self) -> CursorResult<Option<Row>, S::Error> {
        Ok(self.pull()?.map(|(_, row)| row.clone()))
    }

    /// Returns the next row. Same as [`advance`](Self::advance).
    pub fn record(&mut self) -> CursorResult<Option<Row>, S::Error> {
        self.advance()
    }

    /// Returns the cached row, pulling the first one if the cursor is fresh.
    pub fn current(&mut self) -> CursorResult<Option<Row>, S::Error> {
        if !self.started {
            return self.advance();
        }
        Ok(self.current.clone())
    }

    /// Reports whether the cursor is on a row, pulling the first one if the
    /// cursor is fresh.
    pub fn has_current(&mut self) -> CursorResult<bool, S::Error> {
        if !self.started {
            self.pull()?;
        }
        Ok(self.current.is_some())
    }

    /// Resets to the fresh state and seeks the source back to row 0.
    ///
    /// This is a no-op unless iteration has started and the result set is
    /// non-empty, so untouched or empty cursors never cost a seek. If the
    /// seek fails the cursor keeps its previous state.
    pub fn rewind(&mut self) -> CursorResult<(), S::Error> {
        if !self.started {
            trace!("rewind skipped: iteration not started");
            return Ok(());
        }

        let total = self.source.total_rows().map_err(CursorError::Source)?;
        if total == 0 {
            debug!("rewind skipped: empty result set");
            return Ok(());
        }

        debug!(total_rows = total, from_index = self.row_index, "rewinding cursor");
        self.source.seek(0).map_err(CursorError::Source)?;
        self.started = false;
        self.current = None;
        self.row_index = -1;
        Ok(())
    }

    /// Rewinds and returns the first row.
    pub fn first(&mut self) -> CursorResult<Option<Row>, S::Error> {
        self.rewind()?;
        self.current()
    }

    /// Returns an iterator that pulls the remaining rows with
    /// [`advance`](Self::advance).
    ///
    /// The iterator ends at end-of-results and stops after yielding the
    /// first error.
    pub fn rows(&mut self) -> Rows<'_, 's, S> {
        Rows {
            cursor: self,
            done: false,
        }
    }
}

/// Iterator over the remaining rows of a [`ResultCursor`].
#[derive(Debug)]
pub struct Rows<'c, 's, S: RowSource + ?Sized> {
    cursor: &'c mut ResultCursor<'s, S>,
    done: bool,
}

impl<S: RowSource + ?Sized> Iterator for Rows<'_, '_, S> {
    type Item = CursorResult<Row, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.advance() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: RowSource + ?Sized> std::iter::FusedIterator for Rows<'_, '_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryRowSource, Value};

    fn source(n: i64) -> MemoryRowSource {
        (0..n).map(|i| Row::new().with("id", i)).collect()
    }

    fn id(row: Option<Row>) -> Option<Value> {
        row.and_then(|r| r.first().cloned())
    }

    #[test]
    fn test_fresh_cursor() {
        let mut src = source(2);
        let cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.state(), CursorState::Fresh);
        assert_eq!(cursor.index(), -1);
        assert!(!cursor.is_started());
    }

    #[test]
    fn test_advance_until_exhausted() {
        let mut src = source(2);
        let mut cursor = ResultCursor::new(&mut src);

        assert_eq!(id(cursor.advance().unwrap()), Some(Value::int(0)));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.state(), CursorState::Positioned);

        assert_eq!(id(cursor.advance().unwrap()), Some(Value::int(1)));
        assert_eq!(cursor.index(), 1);

        assert!(cursor.advance().unwrap().is_none());
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_current_pulls_lazily_once() {
        let mut src = source(3);
        let mut cursor = ResultCursor::new(&mut src);

        assert_eq!(id(cursor.current().unwrap()), Some(Value::int(0)));
        assert_eq!(id(cursor.current().unwrap()), Some(Value::int(0)));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_current_after_exhaustion_does_not_pull() {
        let mut src = source(0);
        let mut cursor = ResultCursor::new(&mut src);

        assert!(cursor.current().unwrap().is_none());
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current().unwrap().is_none());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_has_current() {
        let mut src = source(1);
        let mut cursor = ResultCursor::new(&mut src);
        assert!(cursor.has_current().unwrap());
        assert!(cursor.has_current().unwrap());
        assert_eq!(cursor.index(), 0);

        cursor.advance().unwrap();
        assert!(!cursor.has_current().unwrap());

        let mut empty = source(0);
        let mut cursor = ResultCursor::new(&mut empty);
        assert!(!cursor.has_current().unwrap());
    }

    #[test]
    fn test_rewind_noop_when_fresh() {
        let mut src = source(2);
        let mut cursor = ResultCursor::new(&mut src);
        cursor.rewind().unwrap();
        assert_eq!(cursor.state(), CursorState::Fresh);
        assert_eq!(cursor.index(), -1);
    }

    #[test]
    fn test_rewind_noop_when_empty() {
        let mut src = source(0);
        let mut cursor = ResultCursor::new(&mut src);
        cursor.advance().unwrap();
        cursor.rewind().unwrap();
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_rewind_after_exhaustion() {
        let mut src = source(2);
        let mut cursor = ResultCursor::new(&mut src);
        while cursor.advance().unwrap().is_some() {}

        cursor.rewind().unwrap();
        assert_eq!(cursor.state(), CursorState::Fresh);
        assert_eq!(cursor.index(), -1);
        assert_eq!(id(cursor.current().unwrap()), Some(Value::int(0)));
    }

    #[test]
    fn test_first() {
        let mut src = source(3);
        let mut cursor = ResultCursor::new(&mut src);
        cursor.advance().unwrap();
        cursor.advance().unwrap();

        assert_eq!(id(cursor.first().unwrap()), Some(Value::int(0)));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_rows_iterator_single_pass() {
        let mut src = source(3);
        let mut cursor = ResultCursor::new(&mut src);

        let ids: Vec<Value> = cursor
            .rows()
            .map(|r| r.unwrap().first().cloned().unwrap())
            .collect();
        assert_eq!(ids, vec![Value::int(0), Value::int(1), Value::int(2)]);

        assert_eq!(cursor.rows().count(), 0);
        cursor.rewind().unwrap();
        assert_eq!(cursor.rows().count(), 3);
    }

    #[test]
    fn test_record_is_advance() {
        let mut src = source(2);
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(id(cursor.record().unwrap()), Some(Value::int(0)));
        assert_eq!(id(cursor.record().unwrap()), Some(Value::int(1)));
    }

    #[test]
    fn test_empty_row_is_not_end_of_results() {
        let mut src = MemoryRowSource::new(vec![Row::new(), Row::new().with("a", Value::Null)]);
        let mut cursor = ResultCursor::new(&mut src);

        assert_eq!(cursor.advance().unwrap(), Some(Row::new()));
        assert!(cursor.has_current().unwrap());
        assert_eq!(cursor.advance().unwrap().map(|r| r.len()), Some(1));
        assert!(cursor.advance().unwrap().is_none());
    }
}
