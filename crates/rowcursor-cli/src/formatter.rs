//! Output formatting for operation results.
//!
//! Supports JSON and plain text output formats.

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::commands::Output;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Formats an operation result according to the specified format.
pub fn format_output(output: &Output, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(output)),
        OutputFormat::Json => format_json(output),
    }
}

/// Formats the result as plain text.
fn format_text(output: &Output) -> String {
    match output {
        Output::Values(values) => values.iter().map(|v| format!("{}\n", v)).collect(),
        Output::Map(map) => map.iter().map(|(k, v)| format!("{}\t{}\n", k, v)).collect(),
        Output::Scalar(value) => value.as_ref().map(|v| format!("{}\n", v)).unwrap_or_default(),
        Output::Rows(rows) => {
            let mut text = String::new();

            // Header from the first row
            if let Some(first) = rows.first() {
                text.push_str(&first.column_names().collect::<Vec<_>>().join("\t"));
                text.push('\n');
            }

            for row in rows {
                let values: Vec<String> = row.values().map(|v| v.to_string()).collect();
                text.push_str(&values.join("\t"));
                text.push('\n');
            }
            text
        }
        Output::Text(text) => text.clone(),
    }
}

/// Formats the result as JSON.
fn format_json(output: &Output) -> Result<String> {
    let json = match output {
        Output::Values(values) => serde_json::to_value(values)?,
        Output::Map(map) => {
            // JSON object keys must be strings
            let mut obj = serde_json::Map::new();
            for (key, value) in map {
                let name = key.to_string();
                if obj.contains_key(&name) {
                    bail!("map keys collide as JSON key {:?}; use text output", name);
                }
                obj.insert(name, serde_json::to_value(value)?);
            }
            JsonValue::Object(obj)
        }
        Output::Scalar(value) => serde_json::to_value(value)?,
        Output::Rows(rows) => serde_json::to_value(rows)?,
        Output::Text(text) => JsonValue::String(text.clone()),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rowcursor_core::{Row, Value};

    #[test]
    fn test_format_values_text() {
        let output = Output::Values(vec![Value::int(1), Value::Null, Value::string("x")]);
        assert_eq!(format_output(&output, OutputFormat::Text).unwrap(), "1\n\nx\n");
    }

    #[test]
    fn test_format_map_json() {
        let mut map = IndexMap::new();
        map.insert(Value::int(1), Value::string("one"));
        map.insert(Value::int(2), Value::Null);

        let json = format_output(&Output::Map(map), OutputFormat::Json).unwrap();
        let parsed: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["1"], "one");
        assert!(parsed["2"].is_null());
    }

    #[test]
    fn test_format_map_json_rejects_colliding_keys() {
        let mut map = IndexMap::new();
        map.insert(Value::int(1), Value::string("number"));
        map.insert(Value::string("1"), Value::string("text"));

        let err = format_output(&Output::Map(map.clone()), OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("\"1\""));

        let text = format_output(&Output::Map(map), OutputFormat::Text).unwrap();
        assert_eq!(text, "1\tnumber\n1\ttext\n");
    }

    #[test]
    fn test_format_scalar() {
        let none = Output::Scalar(None);
        assert_eq!(format_output(&none, OutputFormat::Text).unwrap(), "");
        assert_eq!(format_output(&none, OutputFormat::Json).unwrap(), "null");
    }

    #[test]
    fn test_format_rows_text() {
        let output = Output::Rows(vec![
            Row::new().with("id", 1).with("name", "Alice"),
            Row::new().with("id", 2).with("name", "Bob"),
        ]);
        let text = format_output(&output, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["id\tname", "1\tAlice", "2\tBob"]);
    }

    #[test]
    fn test_format_rows_json_keeps_column_order() {
        let output = Output::Rows(vec![Row::new().with("z", 1).with("a", 2)]);
        let json = format_output(&output, OutputFormat::Json).unwrap();
        assert!(json.find("\"z\"").unwrap() < json.find("\"a\"").unwrap());
    }
}
