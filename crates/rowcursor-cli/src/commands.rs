//! Cursor operations exposed by the CLI.

use anyhow::Result;
use clap::ValueEnum;
use indexmap::IndexMap;
use rowcursor_core::{ResultCursor, Row, RowSource, TableConfig, Value};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A cursor operation to run over the loaded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Values of one column (first column by default)
    Column,
    /// First column keyed by itself
    KeyedColumn,
    /// First column mapped to second column
    Map,
    /// First column of the first row
    Value,
    /// Markup table of all rows
    Table,
    /// All rows
    Rows,
    /// The first row only
    First,
}

/// Result of running an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A sequence of values.
    Values(Vec<Value>),
    /// A key/value mapping.
    Map(IndexMap<Value, Value>),
    /// A single optional value.
    Scalar(Option<Value>),
    /// Whole rows.
    Rows(Vec<Row>),
    /// Pre-rendered text.
    Text(String),
}

/// Runs `operation` over a fresh cursor on `source`.
pub fn execute<S>(
    source: &mut S,
    operation: Operation,
    column: Option<&str>,
    table: &TableConfig,
) -> Result<Output>
where
    S: RowSource + ?Sized,
{
    info!("Running {:?}", operation);
    let mut cursor = ResultCursor::new(source);

    let output = match operation {
        Operation::Column => Output::Values(cursor.column(column)?),
        Operation::KeyedColumn => Output::Map(cursor.keyed_column()?),
        Operation::Map => Output::Map(cursor.map()?),
        Operation::Value => Output::Scalar(cursor.value()?),
        Operation::Table => Output::Text(cursor.render_table_with(table)?),
        Operation::Rows => Output::Rows(cursor.rows().collect::<Result<_, _>>()?),
        Operation::First => Output::Rows(cursor.first()?.into_iter().collect()),
    };

    Ok(output)
}
