use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for page parsing operations.
pub type ParserResult<T> = Result<T, ParserError>;

/// Error type returned by reading, processing and collection loading.
///
/// A single enum is shared across the reader, the row transformer and directory loading.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The CSV file or collection directory does not exist.
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error (including invalid UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell compared by a filter could not be parsed as an integer.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The page configuration is invalid.
    #[error("invalid page config: {message}")]
    Config { message: String },

    /// The page configuration is not valid JSON for the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The collection worker pool could not be created.
    #[error("thread pool error: {message}")]
    ThreadPool { message: String },
}
