//! Core data model types for CSV pages.
//!
//! A CSV file is read into an ordered sequence of [`Row`]s. Each row maps the header's column
//! names to the raw cell strings, keeping header order.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single CSV row: column name -> raw cell value, in header order.
///
/// Rows are never mutated by processing; exclusion builds new rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create a row from `(column, value)` pairs.
    ///
    /// A repeated column name keeps its first position and takes the later value. Each pair is
    /// checked against the columns already added, so the cost is quadratic in the column count;
    /// the CSV reader resolves duplicate headers once per file instead.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut out: Vec<(String, String)> = Vec::new();
        for (k, v) in fields {
            let k = k.into();
            match out.iter_mut().find(|(existing, _)| *existing == k) {
                Some((_, slot)) => *slot = v.into(),
                None => out.push((k, v.into())),
            }
        }
        Self { fields: out }
    }

    /// Create a row from pairs whose column names are already unique.
    pub(crate) fn from_unique(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Returns the raw value for `column`, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the row has a value for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Iterate column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a new row without the columns for which `drop` returns `true`.
    pub fn without<F>(&self, mut drop: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let fields = self
            .fields
            .iter()
            .filter(|(k, _)| !drop(k.as_str()))
            .cloned()
            .collect();
        Self { fields }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Relational operator used by [`FilterSpec`].
///
/// Both directions are strict: a value equal to the threshold never passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Keep rows whose value is `< threshold`.
    #[serde(alias = "LESS_THAN", alias = "<")]
    LessThan,
    /// Keep rows whose value is `> threshold`.
    #[serde(alias = "GREATER_THAN", alias = ">")]
    GreaterThan,
}

impl Direction {
    /// Apply the comparison `value <op> threshold`.
    ///
    /// `value` is wider than the threshold so integers outside the `i64` range still compare.
    pub fn compare(self, value: i128, threshold: i64) -> bool {
        let threshold = i128::from(threshold);
        match self {
            Direction::LessThan => value < threshold,
            Direction::GreaterThan => value > threshold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LessThan => f.write_str("<"),
            Direction::GreaterThan => f.write_str(">"),
        }
    }
}

/// A single threshold filter: `(column, direction, threshold)`.
///
/// Serialized as a three-element array, e.g. `["Age", "less_than", 30]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, Direction, i64)", into = "(String, Direction, i64)")]
pub struct FilterSpec {
    /// Column whose value is compared.
    pub column: String,
    /// Comparison direction.
    pub direction: Direction,
    /// Integer threshold.
    pub threshold: i64,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, direction: Direction, threshold: i64) -> Self {
        Self {
            column: column.into(),
            direction,
            threshold,
        }
    }

    pub fn less_than(column: impl Into<String>, threshold: i64) -> Self {
        Self::new(column, Direction::LessThan, threshold)
    }

    pub fn greater_than(column: impl Into<String>, threshold: i64) -> Self {
        Self::new(column, Direction::GreaterThan, threshold)
    }
}

impl From<(String, Direction, i64)> for FilterSpec {
    fn from((column, direction, threshold): (String, Direction, i64)) -> Self {
        Self {
            column,
            direction,
            threshold,
        }
    }
}

impl From<FilterSpec> for (String, Direction, i64) {
    fn from(spec: FilterSpec) -> Self {
        (spec.column, spec.direction, spec.threshold)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.direction, self.threshold)
    }
}

/// Parsed page body handed back to the host: structured rows plus a raw text body.
///
/// CSV pages carry no prose, so `content` is always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// Row sequence after exclusion and filtering.
    pub rows: Vec<Row>,
    /// Raw textual body (always empty for CSV).
    pub content: String,
}

impl PageContent {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            content: String::new(),
        }
    }

    /// Number of rows in the page.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Split into the `(rows, content)` pair expected by page constructors.
    pub fn into_parts(self) -> (Vec<Row>, String) {
        (self.rows, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_keeps_header_order_and_last_duplicate_value() {
        let row = Row::new([("b", "2"), ("a", "1"), ("b", "3")]);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(row.get("b"), Some("3"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn row_without_leaves_original_untouched() {
        let row = Row::new([("Name", "Alice"), ("Age", "25")]);
        let out = row.without(|c| c == "Age");
        assert_eq!(out, Row::new([("Name", "Alice")]));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn row_serializes_as_ordered_map() {
        let row = Row::new([("Name", "Alice"), ("Age", "25")]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Name":"Alice","Age":"25"}"#);
    }

    #[test]
    fn direction_is_strict_at_boundary() {
        assert!(!Direction::LessThan.compare(30, 30));
        assert!(!Direction::GreaterThan.compare(30, 30));
        assert!(Direction::LessThan.compare(29, 30));
        assert!(Direction::GreaterThan.compare(31, 30));
    }

    #[test]
    fn filter_spec_deserializes_from_triple() {
        let spec: FilterSpec = serde_json::from_str(r#"["Age", "LESS_THAN", 30]"#).unwrap();
        assert_eq!(spec, FilterSpec::less_than("Age", 30));

        let spec: FilterSpec = serde_json::from_str(r#"["Age", ">", -5]"#).unwrap();
        assert_eq!(spec, FilterSpec::greater_than("Age", -5));
        assert_eq!(spec.to_string(), "Age > -5");
    }
}
