//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
///
/// Source failures never surface here; only setup and persistence can fail.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] daybook_config::ConfigError),

    /// The HTTP client could not be created.
    #[error("source setup error: {0}")]
    Source(#[from] daybook_sources::SourceError),

    /// The report file could not be written.
    #[error("failed to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
