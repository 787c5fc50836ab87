//! Report formatter trait.

use chrono::{DateTime, Utc};
use daybook_config::Config;
use daybook_model::Report;
use serde::{Deserialize, Serialize};

/// Settings a formatter needs beyond the report itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Repository identifier shown in the footer (`owner/name`).
    pub repository: String,

    /// Repository web page.
    pub repository_url: String,

    /// Documentation index page.
    pub docs_url: String,

    /// Release notes page.
    pub release_notes_url: String,

    /// Documentation pages itemized before truncating.
    pub max_doc_pages: usize,

    /// Release notes itemized before truncating.
    pub max_release_notes: usize,
}

impl FormatterConfig {
    /// Builds formatter settings from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            repository: config.repository.slug(),
            repository_url: config.repository.html_url(),
            docs_url: config.docs.index_url.clone(),
            release_notes_url: config.release_notes.url.clone(),
            max_doc_pages: config.output.max_doc_pages,
            max_release_notes: config.output.max_release_notes,
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Formats a report into its output text.
pub trait ReportFormatter: Send + Sync {
    /// Returns the formatter name.
    fn name(&self) -> &'static str;

    /// Formats a report.
    ///
    /// Output depends only on the arguments; `generated_at` is the sole
    /// time-dependent input.
    fn format(
        &self,
        report: &Report,
        generated_at: DateTime<Utc>,
        config: &FormatterConfig,
    ) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.repository.owner = "tokio-rs".to_string();
        config.repository.name = "tokio".to_string();
        config.output.max_doc_pages = 3;

        let formatter_config = FormatterConfig::from_config(&config);
        assert_eq!(formatter_config.repository, "tokio-rs/tokio");
        assert_eq!(
            formatter_config.repository_url,
            "https://github.com/tokio-rs/tokio"
        );
        assert_eq!(formatter_config.max_doc_pages, 3);
        assert_eq!(formatter_config.max_release_notes, 10);
    }

    #[test]
    fn test_default_limits() {
        let config = FormatterConfig::default();
        assert_eq!(config.max_doc_pages, 20);
        assert_eq!(config.max_release_notes, 10);
        assert_eq!(config.docs_url, "https://bun.sh/docs");
    }
}
