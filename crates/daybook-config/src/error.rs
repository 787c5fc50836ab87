//! Configuration error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a `daybook.toml` could not be turned into a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("no daybook config at {0}")]
    NotFound(PathBuf),

    /// The config file exists but could not be read.
    #[error("cannot read daybook config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML or has mistyped fields.
    #[error("malformed daybook config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A setting parsed but holds an unusable value.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The search for a config file could not start.
    #[error("cannot determine the working directory")]
    WorkingDir(#[source] io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
