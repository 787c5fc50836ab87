//! The aggregate daily report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::{
    CommitRecord, DocPageRecord, PullRequestRecord, ReleaseNoteEntry, ReleaseRecord,
};

/// Summary used when every category is empty.
pub const NO_UPDATES_SUMMARY: &str = "No updates detected in the last 24 hours.";

/// Singular nouns for each category, in summary order.
const CATEGORY_NOUNS: [&str; 5] = [
    "commit",
    "release",
    "merged pull request",
    "documentation page",
    "release note",
];

/// Everything collected for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The run's calendar date.
    pub date: NaiveDate,

    /// Human-readable summary of the counts below.
    pub summary: String,

    /// Commits authored in the window.
    pub commits: Vec<CommitRecord>,

    /// Releases published in the window.
    pub releases: Vec<ReleaseRecord>,

    /// Pull requests merged in the window.
    pub pull_requests: Vec<PullRequestRecord>,

    /// Pages currently listed on the documentation index.
    pub doc_pages: Vec<DocPageRecord>,

    /// Headings currently listed on the release notes page.
    pub release_notes: Vec<ReleaseNoteEntry>,
}

impl Report {
    /// Creates a report and derives its summary from the collections.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        commits: Vec<CommitRecord>,
        releases: Vec<ReleaseRecord>,
        pull_requests: Vec<PullRequestRecord>,
        doc_pages: Vec<DocPageRecord>,
        release_notes: Vec<ReleaseNoteEntry>,
    ) -> Self {
        let summary = summarize([
            commits.len(),
            releases.len(),
            pull_requests.len(),
            doc_pages.len(),
            release_notes.len(),
        ]);

        Self {
            date,
            summary,
            commits,
            releases,
            pull_requests,
            doc_pages,
            release_notes,
        }
    }

    /// Returns true if no category has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
            && self.releases.is_empty()
            && self.pull_requests.is_empty()
            && self.doc_pages.is_empty()
            && self.release_notes.is_empty()
    }
}

/// Builds the summary sentence.
///
/// `counts` are ordered as commits, releases, merged pull requests,
/// documentation pages, release notes. Empty categories are omitted.
#[must_use]
pub fn summarize(counts: [usize; 5]) -> String {
    let parts: Vec<String> = counts
        .iter()
        .zip(CATEGORY_NOUNS)
        .filter(|(count, _)| **count > 0)
        .map(|(count, noun)| pluralize(*count, noun))
        .collect();

    if parts.is_empty() {
        NO_UPDATES_SUMMARY.to_string()
    } else {
        format!("Daily updates: {}.", parts.join(", "))
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
