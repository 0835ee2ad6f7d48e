//! Page loading entrypoints and implementations.
//!
//! Most callers should use [`CsvPageParser`] (from [`page`]) which:
//!
//! - reads a CSV file into ordered rows ([`csv`])
//! - applies an optional [`crate::config::PageConfig`] (column exclusion, then row filtering)
//! - optionally reports success/failure/alerts to a [`PageObserver`]

pub mod csv;
pub mod observability;
pub mod page;

pub use observability::{
    CompositeObserver, FileObserver, PageContext, PageObserver, PageSeverity, PageStats, StdErrObserver,
};
pub use page::{parse_csv_page, CsvPageParser, PageParser, PageRequest, ParseOptions};
