use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ParserError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the page failed to load).
    Error,
    /// Critical error (missing files and other I/O failures).
    Critical,
}

impl PageSeverity {
    /// Classify a parser error.
    pub fn for_error(e: &ParserError) -> Self {
        match e {
            ParserError::NotFound { .. } | ParserError::Io(_) => PageSeverity::Critical,
            ParserError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => PageSeverity::Critical,
                _ => PageSeverity::Error,
            },
            ParserError::ParseError { .. }
            | ParserError::Config { .. }
            | ParserError::Json(_)
            | ParserError::ThreadPool { .. } => PageSeverity::Error,
        }
    }
}

/// Context about a page load attempt.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// The CSV file being loaded.
    pub path: PathBuf,
}

/// Minimal stats reported when a page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    /// Rows read from the file.
    pub rows_read: usize,
    /// Rows left after exclusion and filtering.
    pub rows_returned: usize,
}

/// Observer interface for page load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PageObserver: Send + Sync {
    /// Called when a page loads.
    fn on_success(&self, _ctx: &PageContext, _stats: PageStats) {}

    /// Called when a page fails to load.
    fn on_failure(&self, _ctx: &PageContext, _severity: PageSeverity, _error: &ParserError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PageObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PageObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PageObserver for CompositeObserver {
    fn on_success(&self, ctx: &PageContext, stats: PageStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs page events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PageObserver for StdErrObserver {
    fn on_success(&self, ctx: &PageContext, stats: PageStats) {
        eprintln!(
            "[csv-page][ok] path={} rows_read={} rows_returned={}",
            ctx.path.display(),
            stats.rows_read,
            stats.rows_returned
        );
    }

    fn on_failure(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        eprintln!(
            "[csv-page][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        eprintln!(
            "[ALERT][csv-page][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Appends page events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PageObserver for FileObserver {
    fn on_success(&self, ctx: &PageContext, stats: PageStats) {
        self.append_line(&format!(
            "{} ok path={} rows_read={} rows_returned={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows_read,
            stats.rows_returned
        ));
    }

    fn on_failure(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &PageContext, severity: PageSeverity, error: &ParserError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_critical() {
        let err = ParserError::NotFound {
            path: PathBuf::from("nope.csv"),
        };
        assert_eq!(PageSeverity::for_error(&err), PageSeverity::Critical);
    }

    #[test]
    fn parse_error_is_not_critical() {
        let err = ParserError::ParseError {
            row: 1,
            column: "Age".to_string(),
            raw: "x".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(PageSeverity::for_error(&err), PageSeverity::Error);
    }

    #[test]
    fn file_observer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("pages.log");
        let obs = FileObserver::new(&log);
        let ctx = PageContext {
            path: PathBuf::from("people.csv"),
        };

        obs.on_success(
            &ctx,
            PageStats {
                rows_read: 3,
                rows_returned: 1,
            },
        );
        obs.on_alert(
            &ctx,
            PageSeverity::Critical,
            &ParserError::NotFound {
                path: PathBuf::from("people.csv"),
            },
        );

        let written = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ok path=people.csv rows_read=3 rows_returned=1"));
        assert!(lines[1].contains("ALERT severity=Critical"));
    }
}
