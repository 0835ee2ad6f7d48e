//! Page parser entrypoint.
//!
//! Most callers should use [`CsvPageParser::parse_content_path`], which reads a CSV file, applies
//! an optional [`PageConfig`] and returns a [`PageContent`] (rows plus an empty text body).
//!
//! If a [`PageObserver`] is configured in [`ParseOptions`], success/failure/alerts are reported
//! to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PageConfig;
use crate::error::ParserResult;
use crate::processing::apply_config;
use crate::types::PageContent;

use super::csv::read_csv_from_path;
use super::observability::{PageContext, PageObserver, PageSeverity, PageStats};

/// Contract between a host's page constructor and a content parser.
///
/// Implementations turn a file path into structured rows plus a raw text body.
pub trait PageParser {
    /// Parse the file at `path`, applying `config` when given.
    fn parse_content_path(&self, path: &Path, config: Option<&PageConfig>) -> ParserResult<PageContent>;
}

/// Options controlling page parsing.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ParseOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PageObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PageSeverity,
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: PageSeverity::Critical,
        }
    }
}

/// CSV implementation of [`PageParser`].
///
/// Holds no per-file state; one parser can be shared across threads and files.
#[derive(Debug, Clone, Default)]
pub struct CsvPageParser {
    options: ParseOptions,
}

impl CsvPageParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn load(&self, path: &Path, config: Option<&PageConfig>) -> ParserResult<(usize, PageContent)> {
        let rows = read_csv_from_path(path)?;
        let rows_read = rows.len();
        let rows = match config {
            Some(cfg) if !cfg.is_noop() => apply_config(&rows, cfg)?,
            _ => rows,
        };
        Ok((rows_read, PageContent::new(rows)))
    }
}

impl PageParser for CsvPageParser {
    /// Read `path`, then exclude columns and filter rows per `config`.
    ///
    /// When an observer is configured, this reports:
    ///
    /// - `on_success` with rows read/returned
    /// - `on_failure` on failure, with a computed severity
    /// - `on_alert` on failure when the severity is >= `alert_at_or_above`
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use csv_pages::config::PageConfig;
    /// use csv_pages::ingestion::{CsvPageParser, PageParser};
    /// use csv_pages::types::FilterSpec;
    ///
    /// # fn main() -> Result<(), csv_pages::ParserError> {
    /// let cfg = PageConfig::new().exclude("City").filter(FilterSpec::greater_than("Age", 30));
    /// let page = CsvPageParser::default().parse_content_path(Path::new("people.csv"), Some(&cfg))?;
    /// let (rows, content) = page.into_parts();
    /// assert!(content.is_empty());
    /// println!("rows={}", rows.len());
    /// # Ok(())
    /// # }
    /// ```
    fn parse_content_path(&self, path: &Path, config: Option<&PageConfig>) -> ParserResult<PageContent> {
        let result = self.load(path, config);

        if let Some(obs) = self.options.observer.as_ref() {
            let ctx = PageContext {
                path: path.to_path_buf(),
            };
            match &result {
                Ok((rows_read, page)) => obs.on_success(
                    &ctx,
                    PageStats {
                        rows_read: *rows_read,
                        rows_returned: page.row_count(),
                    },
                ),
                Err(e) => {
                    let sev = PageSeverity::for_error(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.options.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }

        result.map(|(_, page)| page)
    }
}

/// Convenience helper: parse `path` with a default [`CsvPageParser`].
pub fn parse_csv_page(path: impl AsRef<Path>, config: Option<&PageConfig>) -> ParserResult<PageContent> {
    CsvPageParser::default().parse_content_path(path.as_ref(), config)
}

/// An owned page request, e.g. for queuing work in a job system.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Configuration applied to the page, if any.
    pub config: Option<PageConfig>,
}

impl PageRequest {
    pub fn new(path: impl Into<PathBuf>, config: Option<PageConfig>) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Execute the request with `parser`.
    pub fn run<P: PageParser + ?Sized>(&self, parser: &P) -> ParserResult<PageContent> {
        parser.parse_content_path(&self.path, self.config.as_ref())
    }
}
