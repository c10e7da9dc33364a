//! Bulk extraction over a [`ResultCursor`].
//!
//! Every operation here drives the cursor forward with the same pull used by
//! [`ResultCursor::advance`], starting after the current row and stopping at
//! end-of-results. Each consumes the remaining rows exactly once; run
//! [`ResultCursor::rewind`] between two extractions to see all rows again.
//!
//! A source failure aborts the extraction at the failing fetch. No partial
//! result is returned.

use indexmap::IndexMap;

use crate::error::{CursorError, CursorResult};
use crate::table::TableRenderer;
use crate::{ResultCursor, Row, RowSource, TableConfig, Value};

fn first_column<E>(row_index: i64, row: &Row) -> CursorResult<&Value, E> {
    row.first().ok_or(CursorError::MalformedRow {
        row_index,
        expected: 1,
        columns: 0,
    })
}

impl<S: RowSource + ?Sized> ResultCursor<'_, S> {
    /// Collects one value per remaining row.
    ///
    /// With `Some(name)` the named column is taken; with `None`, the first
    /// declared column.
    pub fn column(&mut self, column: Option<&str>) -> CursorResult<Vec<Value>, S::Error> {
        let mut values = Vec::new();
        while let Some((row_index, row)) = self.pull()? {
            let value = match column {
                Some(name) => row.get(name).ok_or_else(|| CursorError::<S::Error>::ColumnNotFound {
                    row_index,
                    column: name.to_string(),
                })?,
                None => first_column::<S::Error>(row_index, row)?,
            };
            values.push(value.clone());
        }
        Ok(values)
    }

    /// Collects the first column of each remaining row, keyed by itself.
    pub fn keyed_column(&mut self) -> CursorResult<IndexMap<Value, Value>, S::Error> {
        let mut keyed = IndexMap::new();
        while let Some((row_index, row)) = self.pull()? {
            let value = first_column::<S::Error>(row_index, row)?;
            keyed.insert(value.clone(), value.clone());
        }
        Ok(keyed)
    }

    /// Maps the first column of each remaining row to its second column.
    ///
    /// Later duplicates overwrite earlier values. A row with fewer than two
    /// columns fails with [`CursorError::MalformedRow`].
    pub fn map(&mut self) -> CursorResult<IndexMap<Value, Value>, S::Error> {
        let mut mapped = IndexMap::new();
        while let Some((row_index, row)) = self.pull()? {
            match (row.first(), row.second()) {
                (Some(key), Some(value)) => {
                    mapped.insert(key.clone(), value.clone());
                }
                _ => {
                    return Err(CursorError::MalformedRow {
                        row_index,
                        expected: 2,
                        columns: row.len(),
                    })
                }
            }
        }
        Ok(mapped)
    }

    /// Returns the first column of the next row, or `None` when exhausted.
    pub fn value(&mut self) -> CursorResult<Option<Value>, S::Error> {
        match self.pull()? {
            Some((row_index, row)) => Ok(Some(first_column::<S::Error>(row_index, row)?.clone())),
            None => Ok(None),
        }
    }

    /// Renders the remaining rows as a markup table with default options.
    pub fn render_table(&mut self) -> CursorResult<String, S::Error> {
        self.render_table_with(&TableConfig::default())
    }

    /// Renders the remaining rows as a markup table.
    pub fn render_table_with(&mut self, config: &TableConfig) -> CursorResult<String, S::Error> {
        let mut table = TableRenderer::new(config);
        while let Some((_, row)) = self.pull()? {
            table.push_row(row);
        }
        Ok(table.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryRowSource, NO_RECORDS_MESSAGE};

    fn ab_rows() -> MemoryRowSource {
        MemoryRowSource::new(vec![
            Row::new().with("a", 1).with("b", 2),
            Row::new().with("a", 3).with("b", 4),
        ])
    }

    #[test]
    fn test_column_first_and_named() {
        let mut src = ab_rows();
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.column(None).unwrap(), vec![Value::int(1), Value::int(3)]);

        cursor.rewind().unwrap();
        assert_eq!(
            cursor.column(Some("b")).unwrap(),
            vec![Value::int(2), Value::int(4)]
        );
    }

    #[test]
    fn test_column_uses_declared_order() {
        let mut src = MemoryRowSource::new(vec![Row::new().with("z", "first").with("a", "second")]);
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.column(None).unwrap(), vec![Value::string("first")]);
    }

    #[test]
    fn test_column_missing_name() {
        let mut src = ab_rows();
        let mut cursor = ResultCursor::new(&mut src);
        let err = cursor.column(Some("c")).unwrap_err();
        assert!(matches!(
            err,
            CursorError::ColumnNotFound { row_index: 0, ref column } if column == "c"
        ));
    }

    #[test]
    fn test_second_extraction_without_rewind_sees_nothing() {
        let mut src = ab_rows();
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.column(None).unwrap().len(), 2);
        assert!(cursor.column(None).unwrap().is_empty());
        assert!(cursor.map().unwrap().is_empty());
    }

    #[test]
    fn test_keyed_column() {
        let mut src = MemoryRowSource::new(vec![
            Row::new().with("a", 1).with("b", 2),
            Row::new().with("a", 1).with("b", 9),
            Row::new().with("a", 5).with("b", 0),
        ]);
        let mut cursor = ResultCursor::new(&mut src);
        let keyed = cursor.keyed_column().unwrap();

        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed.get(&Value::int(1)), Some(&Value::int(1)));
        assert_eq!(keyed.get(&Value::int(5)), Some(&Value::int(5)));
    }

    #[test]
    fn test_map() {
        let mut src = ab_rows();
        let mut cursor = ResultCursor::new(&mut src);
        let mapped = cursor.map().unwrap();

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped.get(&Value::int(1)), Some(&Value::int(2)));
        assert_eq!(mapped.get(&Value::int(3)), Some(&Value::int(4)));
    }

    #[test]
    fn test_map_duplicate_keys_last_wins() {
        let mut src = MemoryRowSource::new(vec![
            Row::new().with("k", "x").with("v", 1),
            Row::new().with("k", "x").with("v", 2),
        ]);
        let mut cursor = ResultCursor::new(&mut src);
        let mapped = cursor.map().unwrap();
        assert_eq!(mapped.get(&Value::string("x")), Some(&Value::int(2)));
    }

    #[test]
    fn test_map_single_column_is_malformed() {
        let mut src = MemoryRowSource::new(vec![
            Row::new().with("a", 1).with("b", 2),
            Row::new().with("a", 3),
        ]);
        let mut cursor = ResultCursor::new(&mut src);
        let err = cursor.map().unwrap_err();
        assert!(matches!(
            err,
            CursorError::MalformedRow {
                row_index: 1,
                expected: 2,
                columns: 1
            }
        ));
    }

    #[test]
    fn test_value() {
        let mut src = MemoryRowSource::new(vec![Row::new().with("a", 5)]);
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.value().unwrap(), Some(Value::int(5)));
        assert_eq!(cursor.value().unwrap(), None);

        let mut empty = MemoryRowSource::empty();
        let mut cursor = ResultCursor::new(&mut empty);
        assert_eq!(cursor.value().unwrap(), None);
    }

    #[test]
    fn test_value_of_null_column_is_present() {
        let mut src = MemoryRowSource::new(vec![Row::new().with("a", Value::Null)]);
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.value().unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_render_table_empty() {
        let mut src = MemoryRowSource::empty();
        let mut cursor = ResultCursor::new(&mut src);
        assert_eq!(cursor.render_table().unwrap(), NO_RECORDS_MESSAGE);
    }

    #[test]
    fn test_render_table_rows() {
        let mut src = ab_rows();
        let mut cursor = ResultCursor::new(&mut src);
        let html = cursor.render_table().unwrap();

        assert!(html.starts_with("<table>\n<tr><th>a</th> <th>b</th> </tr> \n"));
        assert!(html.contains("<tr><td>3</td> <td>4</td> </tr> \n"));
        assert!(html.ends_with("</table>\n"));
        assert_eq!(html.matches("<th>").count(), 2);
    }
}
