//! `csv-pages` loads CSV files as structured page content for a static-site generator.
//!
//! Each CSV file becomes one page: an ordered sequence of [`types::Row`]s (header column ->
//! raw cell string) plus an empty text body. A per-page [`config::PageConfig`] can:
//!
//! - **exclude columns** from every row (`exclude_columns`)
//! - **filter rows** by comparing an integer column against a threshold (`filter_by`), using
//!   strict `<` / `>` comparisons; all filters must pass
//!
//! Exclusion runs before filtering, so a filter on an excluded column compares the value `0`.
//!
//! ## Quick example: parse one page
//!
//! ```no_run
//! use std::path::Path;
//!
//! use csv_pages::config::PageConfig;
//! use csv_pages::ingestion::{CsvPageParser, PageParser};
//!
//! # fn main() -> Result<(), csv_pages::ParserError> {
//! let cfg = PageConfig::from_json_str(
//!     r#"{"exclude_columns": ["City"], "filter_by": [["Age", "less_than", 30]]}"#,
//! )?;
//! let page = CsvPageParser::default().parse_content_path(Path::new("people.csv"), Some(&cfg))?;
//! println!("rows={}", page.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV reader, page parser entrypoint and observers
//! - [`processing`]: column exclusion and row filtering
//! - [`collection`]: load a directory of CSV files as pages
//! - [`config`]: the per-page configuration bundle
//! - [`types`]: rows, filter specs and page content
//! - [`error`]: error type shared across the crate

pub mod collection;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{ParserError, ParserResult};
