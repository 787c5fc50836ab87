//! Release notes page scraping.

use std::sync::LazyLock;

use daybook_config::ReleaseNotesConfig;
use daybook_model::ReleaseNoteEntry;
use regex::Regex;
use tracing::{info, warn};

use crate::{SourceClient, SourceResult};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[23](?:\s[^>]*)?>(.*?)</h[23]\s*>").expect("invalid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid regex"));

/// Fetches the release notes page and lists its `h2`/`h3` headings.
///
/// Returns an empty collection if the page cannot be fetched.
pub async fn fetch_release_notes(
    client: &SourceClient,
    notes: &ReleaseNotesConfig,
) -> Vec<ReleaseNoteEntry> {
    match try_fetch_release_notes(client, notes).await {
        Ok(entries) => {
            info!(count = entries.len(), url = %notes.url, "fetched release notes");
            entries
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch release notes");
            Vec::new()
        }
    }
}

async fn try_fetch_release_notes(
    client: &SourceClient,
    notes: &ReleaseNotesConfig,
) -> SourceResult<Vec<ReleaseNoteEntry>> {
    let html = client.get_text(&notes.url).await?;
    Ok(extract_headings(&html))
}

/// Extracts the plain text of every `h2` and `h3` heading, in page order.
///
/// Nested tags are removed and whitespace runs collapsed. Headings with no
/// text left are dropped.
#[must_use]
pub fn extract_headings(html: &str) -> Vec<ReleaseNoteEntry> {
    HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|inner| {
            let text = TAG_RE.replace_all(inner.as_str(), "");
            let text = decode_entities(&text);
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            ReleaseNoteEntry::new(&text)
        })
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_config::HttpConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NOTES_HTML: &str = r##"
        <h1>Release notes</h1>
        <h2 id="v1-2">Bun v1.2</h2>
        <p>Lots of things.</p>
        <h3 class="sub"><a href="#node">Node.js <code>compat</code></a></h3>
        <h3>
            Multi-line
            heading
        </h3>
        <h2><span></span></h2>
        <H2>Upper &amp; case</H2>
        <h4>Too deep</h4>
        <header>not a heading</header>
    "##;

    #[test]
    fn test_extract_headings() {
        let entries = extract_headings(NOTES_HTML);
        let texts: Vec<&str> = entries.iter().map(ReleaseNoteEntry::text).collect();
        assert_eq!(
            texts,
            vec![
                "Bun v1.2",
                "Node.js compat",
                "Multi-line heading",
                "Upper & case"
            ]
        );
    }

    #[test]
    fn test_extract_headings_collapses_whitespace() {
        let entries = extract_headings("<h2>Bun  v1.2\n  notes</h2>");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(), "Bun v1.2 notes");
    }

    #[test]
    fn test_extract_headings_anchor_fragment() {
        let entries = extract_headings(r##"<h3><a href="#install">Install</a></h3>"##);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(), "Install");
    }

    #[test]
    fn test_extract_headings_none() {
        assert!(extract_headings("<p>no headings</p>").is_empty());
    }

    #[test]
    fn test_extract_headings_unclosed_runs_to_next_close() {
        let entries = extract_headings("<h2>Open<h3>Closed</h3>");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(), "OpenClosed");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt;b&gt; &quot;c&quot;"), "a <b> \"c\"");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[tokio::test]
    async fn test_fetch_release_notes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/blog"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NOTES_HTML))
            .mount(&server)
            .await;

        let notes = ReleaseNotesConfig {
            url: format!("{}/blog", server.uri()),
        };
        let client = SourceClient::new(&HttpConfig::default()).unwrap();

        let entries = fetch_release_notes(&client, &notes).await;
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].text(), "Bun v1.2");
    }

    #[tokio::test]
    async fn test_fetch_release_notes_failure_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/blog"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let notes = ReleaseNotesConfig {
            url: format!("{}/blog", server.uri()),
        };
        let client = SourceClient::new(&HttpConfig::default()).unwrap();

        assert!(fetch_release_notes(&client, &notes).await.is_empty());
    }
}
