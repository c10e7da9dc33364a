//! The row source contract implemented by database drivers.
//!
//! A driver supplies only physical row retrieval. Iteration state, lazy
//! look-ahead, rewind policy and bulk extraction all live in
//! [`ResultCursor`](crate::ResultCursor).

use crate::Row;

/// Minimal capability set a driver must provide for one executed query.
///
/// End-of-results is a regular return value (`Ok(None)`), never an error.
/// Errors are reserved for genuine failures such as connection loss and are
/// propagated to the cursor's caller unchanged.
pub trait RowSource {
    /// Driver failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Advances the underlying result set by one row and returns it.
    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error>;

    /// Total number of rows in the full result set, independent of position.
    fn total_rows(&self) -> Result<usize, Self::Error>;

    /// Repositions to an absolute zero-based row and returns that row.
    ///
    /// After `seek(n)` the next [`fetch_next`](RowSource::fetch_next) must
    /// return row `n`. Out-of-range indices return `Ok(None)`.
    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Error = S::Error;

    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error> {
        (**self).fetch_next()
    }

    fn total_rows(&self) -> Result<usize, Self::Error> {
        (**self).total_rows()
    }

    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error> {
        (**self).seek(row_index)
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    type Error = S::Error;

    fn fetch_next(&mut self) -> Result<Option<Row>, Self::Error> {
        (**self).fetch_next()
    }

    fn total_rows(&self) -> Result<usize, Self::Error> {
        (**self).total_rows()
    }

    fn seek(&mut self, row_index: usize) -> Result<Option<Row>, Self::Error> {
        (**self).seek(row_index)
    }
}
