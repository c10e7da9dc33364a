//! Row fixtures.

use rowcursor_core::{MemoryRowSource, Row};

/// Rows `{a: 1, b: 2}, {a: 3, b: 4}`.
pub fn ab_rows() -> Vec<Row> {
    vec![
        Row::new().with("a", 1).with("b", 2),
        Row::new().with("a", 3).with("b", 4),
    ]
}

/// `n` rows with columns `id` (0-based) and `label`.
pub fn numbered_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new()
                .with("id", i as i64)
                .with("label", format!("row-{}", i))
        })
        .collect()
}

/// A memory source over [`numbered_rows`].
pub fn numbered_source(n: usize) -> MemoryRowSource {
    MemoryRowSource::new(numbered_rows(n))
}

/// Group rows in the shape of a security group export.
pub fn group_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("Code", "newgroup1")
            .with("Title", "New Group 1")
            .with("ParentID", 0),
        Row::new()
            .with("Code", "newchildgroup1")
            .with("Title", "New Child Group <1>")
            .with("ParentID", 1),
        Row::new()
            .with("Code", "newgroup1")
            .with("Title", "New Group 1 & Co")
            .with("ParentID", 0),
    ]
}
