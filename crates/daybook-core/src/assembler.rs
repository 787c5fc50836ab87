//! Concurrent source collection.

use chrono::Utc;
use daybook_config::Config;
use daybook_model::{Report, TimeWindow};
use daybook_sources::{
    SourceClient, fetch_commits, fetch_doc_pages, fetch_pull_requests, fetch_release_notes,
    fetch_releases,
};
use tracing::info;

use crate::CoreResult;

/// Collects every source for a window into one [`Report`].
pub struct Assembler {
    client: SourceClient,
    config: Config,
}

impl Assembler {
    /// Creates an assembler with an HTTP client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = SourceClient::new(&config.http)?;
        Ok(Self { client, config })
    }

    /// Fetches all five sources concurrently and builds the report.
    ///
    /// Every fetcher absorbs its own failures, so this always yields a report;
    /// unavailable sources contribute empty sections.
    pub async fn assemble(&self, window: &TimeWindow) -> Report {
        let config = &self.config;
        let client = &self.client;
        let observed_at = Utc::now();

        let (commits, releases, pull_requests, doc_pages, release_notes) = tokio::join!(
            fetch_commits(client, &config.repository, window),
            fetch_releases(client, &config.repository, window),
            fetch_pull_requests(client, &config.repository, window),
            fetch_doc_pages(client, &config.docs, observed_at),
            fetch_release_notes(client, &config.release_notes),
        );

        let report = Report::new(
            window.date(),
            commits,
            releases,
            pull_requests,
            doc_pages,
            release_notes,
        );

        info!(date = %report.date, summary = %report.summary, "assembled report");
        report
    }
}
