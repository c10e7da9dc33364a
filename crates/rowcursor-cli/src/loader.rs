//! Row file loading.
//!
//! Accepts either a JSON array of objects or a stream of objects (one per
//! line, JSON Lines style). Object key order becomes column order.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rowcursor_core::{MemoryRowSource, Row};
use tracing::debug;

/// Parses rows from JSON text.
pub fn parse_rows(input: &str) -> Result<Vec<Row>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("parsing JSON array of rows");
    }

    if !trimmed.starts_with('{') {
        bail!("expected a JSON array or a stream of JSON objects");
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Row>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("parsing row {}", i)))
        .collect()
}

/// Loads a row file into an in-memory row source.
pub fn load_source(path: &Path) -> Result<MemoryRowSource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading rows from {}", path.display()))?;
    let rows = parse_rows(&content)?;
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(MemoryRowSource::new(rows))
}
