//! Per-page configuration bundle.
//!
//! A host passes one [`PageConfig`] per CSV file. Both options are optional:
//!
//! ```json
//! {
//!   "exclude_columns": ["City"],
//!   "filter_by": [["Age", "less_than", 30]]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, ParserResult};
use crate::types::FilterSpec;

/// Column exclusion and row filtering options for a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Columns dropped from every row.
    pub exclude_columns: Vec<String>,
    /// Filters a row must satisfy (all of them) to be kept.
    pub filter_by: Vec<FilterSpec>,
}

impl PageConfig {
    /// Create an empty (no-op) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column to exclude.
    pub fn exclude(mut self, column: impl Into<String>) -> Self {
        self.exclude_columns.push(column.into());
        self
    }

    /// Add a filter.
    pub fn filter(mut self, spec: FilterSpec) -> Self {
        self.filter_by.push(spec);
        self
    }

    /// Whether applying this configuration leaves rows unchanged.
    pub fn is_noop(&self) -> bool {
        self.exclude_columns.is_empty() && self.filter_by.is_empty()
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(input: &str) -> ParserResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> ParserResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParserError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
