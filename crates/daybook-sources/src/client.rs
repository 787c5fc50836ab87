//! Shared HTTP client.

use std::time::Duration;

use daybook_config::HttpConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{SourceError, SourceResult};

/// HTTP client shared by all fetchers.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: reqwest::Client,
}

impl SourceClient {
    /// Creates a client with the configured user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &HttpConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { client })
    }

    /// Sends a GitHub API request and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> SourceResult<T> {
        debug!(%url, ?query, "requesting JSON");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .query(query)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.json().await.map_err(|source| SourceError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a page's raw markup.
    pub(crate) async fn get_text(&self, url: &str) -> SourceResult<String> {
        debug!(%url, "requesting page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(|source| SourceError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
