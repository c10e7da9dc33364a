//! Result row representation.
//!
//! A `Row` is an ordered list of `(column name, value)` pairs. Column order is
//! the order declared by the query, and several extraction operations address
//! columns positionally ("first column", "second column").

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Value;

/// A single result row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Creates an empty row with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Builder form of [`Row::push`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a column. A column with the same name is replaced in place,
    /// keeping its original position.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the value of the named column.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the column at a declared position.
    pub fn column_at(&self, index: usize) -> Option<(&str, &Value)> {
        self.columns.get(index).map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the value of the first declared column.
    pub fn first(&self) -> Option<&Value> {
        self.columns.first().map(|(_, v)| v)
    }

    /// Returns the value of the second declared column.
    pub fn second(&self) -> Option<&Value> {
        self.columns.get(1).map(|(_, v)| v)
    }

    /// Returns the column names in declared order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the values in declared order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(|(_, v)| v)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.push(name, value);
        }
        row
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of column names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
        let mut row = Row::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            row.push(name, value);
        }
        Ok(row)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RowVisitor)
    }
}
