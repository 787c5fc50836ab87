//! Per-source records collected for a report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from a release body.
const RELEASE_BODY_LIMIT: usize = 200;

/// Marker appended to a truncated release body.
const ELLIPSIS: &str = "...";

/// Length of an abbreviated commit SHA.
const SHORT_SHA_LEN: usize = 7;

/// A commit authored inside the report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated commit SHA (first 7 characters).
    pub sha: String,

    /// First line of the commit message.
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The author timestamp.
    pub date: DateTime<Utc>,

    /// Link to the commit page.
    pub url: String,
}

impl CommitRecord {
    /// Creates a commit record, keeping only the subject line and the short SHA.
    #[must_use]
    pub fn new(
        sha: &str,
        message: &str,
        author: impl Into<String>,
        date: DateTime<Utc>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            sha: sha.chars().take(SHORT_SHA_LEN).collect(),
            message: message.lines().next().unwrap_or("").to_string(),
            author: author.into(),
            date,
            url: url.into(),
        }
    }
}

/// A release published inside the report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// The release tag.
    pub tag: String,

    /// Display name, the tag when the release has no name.
    pub name: String,

    /// Link to the release page.
    pub url: String,

    /// The publish timestamp.
    pub published_at: DateTime<Utc>,

    /// First 200 characters of the release body plus `...`, empty when absent.
    pub body: String,
}

impl ReleaseRecord {
    /// Creates a release record with name fallback and body truncation applied.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        name: Option<&str>,
        url: impl Into<String>,
        published_at: DateTime<Utc>,
        body: Option<&str>,
    ) -> Self {
        let tag = tag.into();
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => tag.clone(),
        };

        Self {
            tag,
            name,
            url: url.into(),
            published_at,
            body: body.map(truncate_body).unwrap_or_default(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let mut truncated: String = body.chars().take(RELEASE_BODY_LIMIT).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// A pull request merged inside the report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// The pull request number.
    pub number: u64,

    /// The pull request title.
    pub title: String,

    /// Link to the pull request page.
    pub url: String,

    /// The merge timestamp.
    pub merged_at: DateTime<Utc>,
}

impl PullRequestRecord {
    /// Creates a new pull request record.
    #[must_use]
    pub fn new(
        number: u64,
        title: impl Into<String>,
        url: impl Into<String>,
        merged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            url: url.into(),
            merged_at,
        }
    }
}

/// A documentation page listed on the documentation index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocPageRecord {
    /// Last segment of the page path.
    pub title: String,

    /// Absolute page URL.
    pub url: String,

    /// When the index was scraped. Not the page's modification time.
    pub observed_at: DateTime<Utc>,
}

impl DocPageRecord {
    /// Creates a record for a relative page path such as `/docs/install/linux`.
    #[must_use]
    pub fn from_path(base_url: &str, path: &str, observed_at: DateTime<Utc>) -> Self {
        let title = path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(path)
            .to_string();

        let base = base_url.trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };

        Self {
            title,
            url,
            observed_at,
        }
    }
}

/// A heading extracted from the release notes page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseNoteEntry(String);

impl ReleaseNoteEntry {
    /// Creates an entry from plain heading text.
    ///
    /// Returns `None` when the text is empty after trimming.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self(text.to_string()))
        }
    }

    /// Returns the entry text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_commit_keeps_first_line() {
        let commit = CommitRecord::new(
            "abc1234567890",
            "feat: add feature\n\nLonger body\nwith more lines",
            "Jane",
            at(10),
            "https://github.com/o/r/commit/abc1234567890",
        );

        assert_eq!(commit.message, "feat: add feature");
        assert_eq!(commit.sha, "abc1234");
    }

    #[test]
    fn test_commit_single_line_message() {
        let commit = CommitRecord::new("abc", "fix typo", "Jane", at(10), "u");
        assert_eq!(commit.message, "fix typo");
        assert_eq!(commit.sha, "abc");
    }

    #[test]
    fn test_commit_empty_message() {
        let commit = CommitRecord::new("abc1234", "", "Jane", at(10), "u");
        assert_eq!(commit.message, "");
    }

    #[test]
    fn test_commit_crlf_message() {
        let commit = CommitRecord::new("abc1234", "subject\r\nbody", "Jane", at(10), "u");
        assert_eq!(commit.message, "subject");
    }

    #[test]
    fn test_release_name_fallback() {
        let release = ReleaseRecord::new("v1.2.0", None, "u", at(10), None);
        assert_eq!(release.name, "v1.2.0");

        let release = ReleaseRecord::new("v1.2.0", Some(""), "u", at(10), None);
        assert_eq!(release.name, "v1.2.0");

        let release = ReleaseRecord::new("v1.2.0", Some("Spring"), "u", at(10), None);
        assert_eq!(release.name, "Spring");
    }

    #[test]
    fn test_release_body_absent() {
        let release = ReleaseRecord::new("v1", None, "u", at(10), None);
        assert_eq!(release.body, "");
    }

    #[test]
    fn test_release_body_short_gets_ellipsis() {
        let release = ReleaseRecord::new("v1", None, "u", at(10), Some("Bug fixes"));
        assert_eq!(release.body, "Bug fixes...");
    }

    #[test]
    fn test_release_body_empty() {
        let release = ReleaseRecord::new("v1", None, "u", at(10), Some(""));
        assert_eq!(release.body, "");
    }

    #[test]
    fn test_release_body_truncated() {
        let body = "x".repeat(250);
        let release = ReleaseRecord::new("v1", None, "u", at(10), Some(&body));
        assert_eq!(release.body.len(), 203);
        assert!(release.body.ends_with("..."));
        assert!(release.body.starts_with(&"x".repeat(200)));
    }

    #[test]
    fn test_release_body_truncated_on_char_boundary() {
        let body = "é".repeat(201);
        let release = ReleaseRecord::new("v1", None, "u", at(10), Some(&body));
        assert_eq!(release.body.chars().count(), 203);
    }

    #[test]
    fn test_doc_page_from_nested_path() {
        let page = DocPageRecord::from_path("https://bun.sh", "/docs/install/linux", at(10));
        assert_eq!(page.title, "linux");
        assert_eq!(page.url, "https://bun.sh/docs/install/linux");
        assert_eq!(page.observed_at, at(10));
    }

    #[test]
    fn test_doc_page_trailing_slashes() {
        let page = DocPageRecord::from_path("https://bun.sh/", "/docs/runtime/", at(10));
        assert_eq!(page.title, "runtime");
        assert_eq!(page.url, "https://bun.sh/docs/runtime/");
    }

    #[test]
    fn test_doc_page_without_segments() {
        let page = DocPageRecord::from_path("https://bun.sh", "/", at(10));
        assert_eq!(page.title, "/");
        assert_eq!(page.url, "https://bun.sh/");
    }

    #[test]
    fn test_doc_page_relative_path() {
        let page = DocPageRecord::from_path("https://bun.sh", "docs/cli", at(10));
        assert_eq!(page.url, "https://bun.sh/docs/cli");
        assert_eq!(page.title, "cli");
    }

    #[test]
    fn test_release_note_trims() {
        let entry = ReleaseNoteEntry::new("  Version 1.2  ").unwrap();
        assert_eq!(entry.text(), "Version 1.2");
    }

    #[test]
    fn test_release_note_rejects_blank() {
        assert!(ReleaseNoteEntry::new("").is_none());
        assert!(ReleaseNoteEntry::new(" \n\t ").is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = CommitRecord::new("abc1234", "msg", "Jane", at(10), "u");
        let json = serde_json::to_string(&commit).unwrap();
        let back: CommitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, back);

        let entry = ReleaseNoteEntry::new("Heading").unwrap();
        assert_eq!(serde_json::to_string(&entry).unwrap(), "\"Heading\"");
    }
}
