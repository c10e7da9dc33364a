//! # rowcursor-test
//!
//! Integration tests for rowcursor.
//!
//! This crate contains:
//! - Instrumented row sources that count driver calls
//! - Failure-injecting row sources
//! - Row fixtures shared by the end-to-end tests

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Instrumented and failing row sources
pub mod sources;

/// Row fixtures
pub mod fixtures;

pub use sources::{CallCounts, CountingRowSource, FailingRowSource, SourceError};
