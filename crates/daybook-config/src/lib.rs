//! Configuration management for Daybook.
//!
//! This crate handles loading and validating the `daybook.toml` configuration file.
//! Every field has a default, so a missing file yields a usable configuration.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{
    Config, DocsConfig, HttpConfig, OutputConfig, ReleaseNotesConfig, RepositoryConfig,
};
