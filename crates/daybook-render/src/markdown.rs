//! Markdown digest formatter.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use daybook_model::{Report, iso_date};

use crate::{FormatterConfig, ReportFormatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Markdown formatter.
///
/// Sections appear in a fixed order. The repository sections are always
/// present; documentation pages and release notes only when non-empty.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_commits(output: &mut String, report: &Report) {
        if report.commits.is_empty() {
            _ = writeln!(output, "## Commits\n\nNo commits in the last 24 hours.\n");
            return;
        }

        _ = writeln!(output, "## Commits ({})\n", report.commits.len());
        for commit in &report.commits {
            _ = writeln!(
                output,
                "- [`{}`]({}) {} ({}, {})",
                commit.sha,
                commit.url,
                commit.message,
                commit.author,
                commit.date.format(TIMESTAMP_FORMAT)
            );
        }
        output.push('\n');
    }

    fn write_releases(output: &mut String, report: &Report) {
        if report.releases.is_empty() {
            _ = writeln!(output, "## Releases\n\nNo releases in the last 24 hours.\n");
            return;
        }

        _ = writeln!(output, "## Releases ({})\n", report.releases.len());
        for release in &report.releases {
            _ = writeln!(
                output,
                "- [{}]({}) `{}` (published {})",
                release.name,
                release.url,
                release.tag,
                release.published_at.format(TIMESTAMP_FORMAT)
            );
            for line in release.body.lines().filter(|l| !l.trim().is_empty()) {
                _ = writeln!(output, "  > {}", line.trim_end());
            }
        }
        output.push('\n');
    }

    fn write_pull_requests(output: &mut String, report: &Report) {
        if report.pull_requests.is_empty() {
            _ = writeln!(
                output,
                "## Merged Pull Requests\n\nNo pull requests merged in the last 24 hours.\n"
            );
            return;
        }

        _ = writeln!(
            output,
            "## Merged Pull Requests ({})\n",
            report.pull_requests.len()
        );
        for pull in &report.pull_requests {
            _ = writeln!(
                output,
                "- [#{}]({}) {} (merged {})",
                pull.number,
                pull.url,
                pull.title,
                pull.merged_at.format(TIMESTAMP_FORMAT)
            );
        }
        output.push('\n');
    }

    fn write_doc_pages(output: &mut String, report: &Report, limit: usize) {
        if report.doc_pages.is_empty() {
            return;
        }

        _ = writeln!(output, "## Documentation Pages ({})\n", report.doc_pages.len());
        for page in report.doc_pages.iter().take(limit) {
            _ = writeln!(output, "- [{}]({})", page.title, page.url);
        }
        write_overflow(output, report.doc_pages.len(), limit, "pages");
        output.push('\n');
    }

    fn write_release_notes(output: &mut String, report: &Report, limit: usize) {
        if report.release_notes.is_empty() {
            return;
        }

        _ = writeln!(output, "## Release Notes ({})\n", report.release_notes.len());
        for entry in report.release_notes.iter().take(limit) {
            _ = writeln!(output, "- {}", entry.text());
        }
        write_overflow(output, report.release_notes.len(), limit, "entries");
        output.push('\n');
    }

    fn write_footer(output: &mut String, config: &FormatterConfig) {
        _ = writeln!(output, "---\n");
        _ = writeln!(
            output,
            "_Compiled from [{}]({}), the [documentation]({}) and the [release notes]({})._",
            config.repository, config.repository_url, config.docs_url, config.release_notes_url
        );
    }
}

/// Appends `... and N more <noun>` when `total` exceeds `limit`.
fn write_overflow(output: &mut String, total: usize, limit: usize, noun: &str) {
    if total > limit {
        _ = writeln!(output, "\n... and {} more {noun}", total - limit);
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn format(
        &self,
        report: &Report,
        generated_at: DateTime<Utc>,
        config: &FormatterConfig,
    ) -> String {
        let mut output = String::new();

        _ = writeln!(output, "# Daily Digest: {}\n", iso_date(report.date));
        _ = writeln!(
            output,
            "_Generated at {} UTC_\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        _ = writeln!(output, "## Summary\n\n{}\n", report.summary);

        Self::write_commits(&mut output, report);
        Self::write_releases(&mut output, report);
        Self::write_pull_requests(&mut output, report);
        Self::write_doc_pages(&mut output, report, config.max_doc_pages);
        Self::write_release_notes(&mut output, report, config.max_release_notes);
        Self::write_footer(&mut output, config);

        output
    }
}
