//! # rowcursor-core
//!
//! Database-agnostic query result cursor.
//!
//! Drivers implement [`RowSource`], three primitives for one executed query:
//! fetch the next row, report the total row count, and seek to a row. This
//! crate layers everything else on top:
//!
//! - **Iteration**: [`ResultCursor`] with lazy look-ahead and explicit rewind
//! - **Extraction**: single column, keyed column, two-column map, scalar
//! - **Rendering**: escaped markup tables
//!
//! ## Example
//!
//! ```rust
//! use rowcursor_core::{MemoryRowSource, ResultCursor, Row, Value};
//!
//! let mut source = MemoryRowSource::new(vec![
//!     Row::new().with("id", 1).with("name", "Alice"),
//!     Row::new().with("id", 2).with("name", "Bob"),
//! ]);
//! let mut cursor = ResultCursor::new(&mut source);
//!
//! let names = cursor.column(Some("name")).unwrap();
//! assert_eq!(names, vec![Value::string("Alice"), Value::string("Bob")]);
//!
//! cursor.rewind().unwrap();
//! let by_id = cursor.map().unwrap();
//! assert_eq!(by_id.get(&Value::int(2)), Some(&Value::string("Bob")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Rendering configuration
pub mod config;

/// Result cursor and iteration state
pub mod cursor;

/// Error types
pub mod error;

/// Bulk extraction operations
mod extract;

/// In-memory row source
pub mod memory;

/// Result rows
pub mod row;

/// Row source contract
pub mod source;

/// Markup table rendering
pub mod table;

/// Column values
pub mod value;

pub use config::{TableConfig, NO_RECORDS_MESSAGE};
pub use cursor::{CursorState, ResultCursor, Rows};
pub use error::{ConfigError, CursorError, CursorResult};
pub use memory::MemoryRowSource;
pub use row::Row;
pub use source::RowSource;
pub use table::{escape_markup, TableRenderer};
pub use value::Value;
