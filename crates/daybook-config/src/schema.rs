//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source repository configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Documentation index configuration.
    #[serde(default)]
    pub docs: DocsConfig,

    /// Release notes page configuration.
    #[serde(default)]
    pub release_notes: ReleaseNotesConfig,

    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Checks values that serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        require_non_empty("repository.owner", &self.repository.owner)?;
        require_non_empty("repository.name", &self.repository.name)?;
        require_http_url("repository.api_base_url", &self.repository.api_base_url)?;
        require_http_url("docs.base_url", &self.docs.base_url)?;
        require_http_url("docs.index_url", &self.docs.index_url)?;
        require_http_url("release_notes.url", &self.release_notes.url)?;
        require_non_empty("output.root", &self.output.root)?;
        require_non_empty("output.extension", &self.output.extension)?;

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "http.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn require_non_empty(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_http_url(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be an http(s) URL, got {value:?}"),
        })
    }
}

/// Source repository configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Repository owner (user or organization).
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name.
    #[serde(default = "default_repo_name")]
    pub name: String,

    /// GitHub REST API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl RepositoryConfig {
    /// Returns the `owner/name` identifier.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns the repository's web page.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            name: default_repo_name(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_owner() -> String {
    "oven-sh".to_string()
}

fn default_repo_name() -> String {
    "bun".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

/// Documentation index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Base URL joined with scraped `/docs/...` paths.
    #[serde(default = "default_docs_base_url")]
    pub base_url: String,

    /// Page listing the documentation links.
    #[serde(default = "default_docs_index_url")]
    pub index_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_docs_base_url(),
            index_url: default_docs_index_url(),
        }
    }
}

fn default_docs_base_url() -> String {
    "https://bun.sh".to_string()
}

fn default_docs_index_url() -> String {
    "https://bun.sh/docs".to_string()
}

/// Release notes page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseNotesConfig {
    /// Page whose `h2`/`h3` headings are collected.
    #[serde(default = "default_release_notes_url")]
    pub url: String,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            url: default_release_notes_url(),
        }
    }
}

fn default_release_notes_url() -> String {
    "https://bun.sh/blog".to_string()
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory of the `<year>/<month>/<day>` tree.
    #[serde(default = "default_output_root")]
    pub root: String,

    /// Report file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Documentation pages itemized before the "more pages" note.
    #[serde(default = "default_max_doc_pages")]
    pub max_doc_pages: usize,

    /// Release notes itemized before the "more entries" note.
    #[serde(default = "default_max_release_notes")]
    pub max_release_notes: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            extension: default_extension(),
            max_doc_pages: default_max_doc_pages(),
            max_release_notes: default_max_release_notes(),
        }
    }
}

fn default_output_root() -> String {
    "daily".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_max_doc_pages() -> usize {
    20
}

fn default_max_release_notes() -> usize {
    10
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request. GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("daybook/", env!("CARGO_PKG_VERSION")).to_string()
}
