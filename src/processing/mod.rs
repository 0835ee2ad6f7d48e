//! Row transformations applied to a page's row sequence.
//!
//! Two independent operations are provided:
//!
//! - [`exclude_columns()`]: drop named columns from every row
//! - [`filter_rows()`]: keep rows whose integer columns pass every [`crate::types::FilterSpec`]
//!
//! [`apply_config()`] composes both for a [`PageConfig`]: exclusion first, then filtering. A
//! filter on an excluded column therefore sees the column as absent and compares it as `0`.
//!
//! ## Example
//!
//! ```rust
//! use csv_pages::config::PageConfig;
//! use csv_pages::processing::apply_config;
//! use csv_pages::types::{FilterSpec, Row};
//!
//! let rows = vec![
//!     Row::new([("Name", "Alice"), ("Age", "25"), ("City", "New York")]),
//!     Row::new([("Name", "Bob"), ("Age", "31"), ("City", "Chicago")]),
//! ];
//! let cfg = PageConfig::new()
//!     .exclude("City")
//!     .filter(FilterSpec::less_than("Age", 30));
//!
//! let out = apply_config(&rows, &cfg).unwrap();
//! assert_eq!(out, vec![Row::new([("Name", "Alice"), ("Age", "25")])]);
//! ```

pub mod exclude;
pub mod filter;

pub use exclude::exclude_columns;
pub use filter::{filter_rows, row_matches};

use crate::config::PageConfig;
use crate::error::ParserResult;
use crate::types::Row;

/// Apply a page configuration: exclude columns, then filter rows.
pub fn apply_config(rows: &[Row], config: &PageConfig) -> ParserResult<Vec<Row>> {
    let kept = exclude_columns(rows, config.exclude_columns.as_slice());
    filter_rows(&kept, &config.filter_by)
}
