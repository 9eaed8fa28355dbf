//! Type definitions for decoded and encodable CSV data

use indexmap::IndexMap;
use std::fmt;

/// Ordered column names governing the shape of a [`Row`]
pub type Header = Vec<String>;

/// One row's decoded field values, before being bound to a header
pub type Record = Vec<String>;

/// Ordered sequence of rows nominally sharing one header
pub type Table = Vec<Row>;

/// First-wins mapping from a key column's value to its row
///
/// Iteration order is the order in which keys were first seen.
pub type KeyedIndex = IndexMap<String, Row>;

/// Ordered mapping from column name to field value
///
/// Entries keep insertion order, which follows the header when the row comes
/// out of a decode. A value may be null (`None`) on the encode side; null
/// fields are written as the literal text `NULL`. Decoded rows never contain
/// nulls.
///
/// Inserting a column that already exists replaces its value but keeps its
/// original position.
///
/// # Examples
///
/// ```
/// use csvrows::Row;
///
/// let mut row: Row = [("id", "1"), ("name", "Alice")].into_iter().collect();
/// row.insert_null("nickname");
///
/// assert_eq!(row.get("name"), Some("Alice"));
/// assert!(row.is_null("nickname"));
/// assert_eq!(row.columns().collect::<Vec<_>>(), ["id", "name", "nickname"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Row {
    fields: IndexMap<String, Option<String>>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with room for `capacity` columns
    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Set a column to a text value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), Some(value.into()));
    }

    /// Set a column to null
    pub fn insert_null(&mut self, column: impl Into<String>) {
        self.fields.insert(column.into(), None);
    }

    /// Set a column to a possibly-null value
    pub fn insert_field(&mut self, column: impl Into<String>, value: Option<String>) {
        self.fields.insert(column.into(), value);
    }

    /// Text value of a column; `None` when the column is absent or null
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(|v| v.as_deref())
    }

    /// Raw field of a column, distinguishing absent (`None`) from null (`Some(None)`)
    pub fn get_field(&self, column: &str) -> Option<Option<&str>> {
        self.fields.get(column).map(|v| v.as_deref())
    }

    /// Whether the row has an entry for `column`
    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Whether `column` is present and null
    pub fn is_null(&self, column: &str) -> bool {
        matches!(self.fields.get(column), Some(None))
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field values in column order
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.fields.values().map(|v| v.as_deref())
    }

    /// `(column, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if row has no entries
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Unwrap into the underlying ordered map
    pub fn into_inner(self) -> IndexMap<String, Option<String>> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

impl From<IndexMap<String, Option<String>>> for Row {
    fn from(fields: IndexMap<String, Option<String>>) -> Self {
        Row { fields }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (column, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{}: {:?}", column, v)?,
                None => write!(f, "{}: null", column)?,
            }
        }
        write!(f, "}}")
    }
}

/// Counters collected while decoding a document
///
/// Skipped rows and duplicate keys are not errors; these counters only make
/// them observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Records considered as data (header record excluded)
    pub records: usize,
    /// Rows produced
    pub rows: usize,
    /// Records dropped because their field count did not match the header
    pub skipped_rows: usize,
    /// Rows left out of a keyed index because their key was already taken
    pub duplicate_keys: usize,
    /// Records that contained an unterminated quoted span
    pub malformed_records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order_follows_insertion() {
        let mut row = Row::new();
        row.insert("b", "2");
        row.insert("a", "1");
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(row.values().collect::<Vec<_>>(), vec![Some("2"), Some("1")]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut row: Row = [("a", "1"), ("b", "2")].into_iter().collect();
        row.insert("a", "3");
        assert_eq!(row.len(), 2);
        assert_eq!(row.iter().next(), Some(("a", Some("3"))));
    }

    #[test]
    fn test_null_versus_absent() {
        let mut row = Row::new();
        row.insert_null("x");
        assert_eq!(row.get("x"), None);
        assert_eq!(row.get_field("x"), Some(None));
        assert_eq!(row.get_field("y"), None);
        assert!(row.is_null("x"));
        assert!(!row.is_null("y"));
        assert!(row.contains_column("x"));
    }

    #[test]
    fn test_display() {
        let mut row: Row = [("id", "1")].into_iter().collect();
        row.insert_null("name");
        assert_eq!(row.to_string(), r#"{id: "1", name: null}"#);
    }
}
