//! Error types for cursor operations.

use thiserror::Error;

/// Cursor error type, generic over the row source's failure type.
#[derive(Debug, Error)]
pub enum CursorError<E> {
    /// The row source failed. Carried through unchanged.
    #[error("row source failed: {0}")]
    Source(#[source] E),

    /// A row had too few columns for a positional extraction.
    #[error("malformed row {row_index}: expected at least {expected} columns, found {columns}")]
    MalformedRow {
        /// Zero-based ordinal of the offending row.
        row_index: i64,
        /// Number of columns required by the operation.
        expected: usize,
        /// Number of columns the row actually had.
        columns: usize,
    },

    /// A named column was absent from a row.
    #[error("column not found in row {row_index}: {column}")]
    ColumnNotFound {
        /// Zero-based ordinal of the offending row.
        row_index: i64,
        /// The requested column name.
        column: String,
    },
}

impl<E> CursorError<E> {
    /// Returns true if the error originated in the row source.
    pub fn is_source(&self) -> bool {
        matches!(self, CursorError::Source(_))
    }

    /// Returns the row source error, if that is what this is.
    pub fn into_source(self) -> Option<E> {
        match self {
            CursorError::Source(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for cursor operations.
pub type CursorResult<T, E> = Result<T, CursorError<E>>;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
