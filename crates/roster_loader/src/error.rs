//! Error types for source loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching or parsing a source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be reached or returned an error status
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The source is larger than the configured ceiling
    #[error("File size exceeds limit: {size} bytes is more than {limit} bytes")]
    SourceTooLarge { size: u64, limit: u64 },

    /// Local file I/O failed
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transfer failed after the response started
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV content could not be parsed
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet content could not be parsed
    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    /// Text content is not valid UTF-8
    #[error("Source is not valid UTF-8: {0}")]
    Encoding(String),
}

impl LoadError {
    /// Creates a new I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new source-unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable(message.into())
    }

    /// Creates a new spreadsheet error.
    pub fn spreadsheet(message: impl Into<String>) -> Self {
        Self::Spreadsheet(message.into())
    }

    /// Creates a new size-limit error.
    pub fn too_large(size: u64, limit: u64) -> Self {
        Self::SourceTooLarge { size, limit }
    }
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
