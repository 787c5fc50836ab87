//! Documentation index scraping.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use daybook_config::DocsConfig;
use daybook_model::DocPageRecord;
use regex::Regex;
use tracing::{info, warn};

use crate::{SourceClient, SourceResult};

static DOC_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*?\bhref\s*=\s*["'](/docs/[^"'#?\s]+)"#).expect("invalid regex")
});

/// Fetches the documentation index and lists every linked page.
///
/// `observed_at` is recorded on each page as its timestamp. Returns an empty
/// collection if the index cannot be fetched.
pub async fn fetch_doc_pages(
    client: &SourceClient,
    docs: &DocsConfig,
    observed_at: DateTime<Utc>,
) -> Vec<DocPageRecord> {
    match try_fetch_doc_pages(client, docs, observed_at).await {
        Ok(pages) => {
            info!(count = pages.len(), url = %docs.index_url, "fetched documentation pages");
            pages
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch documentation index");
            Vec::new()
        }
    }
}

async fn try_fetch_doc_pages(
    client: &SourceClient,
    docs: &DocsConfig,
    observed_at: DateTime<Utc>,
) -> SourceResult<Vec<DocPageRecord>> {
    let html = client.get_text(&docs.index_url).await?;

    Ok(extract_doc_paths(&html)
        .iter()
        .map(|path| DocPageRecord::from_path(&docs.base_url, path, observed_at))
        .collect())
}

/// Extracts the distinct `/docs/...` anchor targets, sorted by path.
///
/// Fragments and query strings are not part of the path.
#[must_use]
pub fn extract_doc_paths(html: &str) -> BTreeSet<String> {
    DOC_LINK_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
