//! Record and report types for Daybook.
//!
//! This crate provides the value types shared across the pipeline:
//! - [`CommitRecord`], [`ReleaseRecord`], [`PullRequestRecord`]: repository activity
//! - [`DocPageRecord`], [`ReleaseNoteEntry`]: scraped documentation snapshots
//! - [`Report`]: the aggregate for one calendar date
//! - [`TimeWindow`]: the "last 24 hours" inclusion boundary

mod records;
mod report;
mod window;

pub use records::{CommitRecord, DocPageRecord, PullRequestRecord, ReleaseNoteEntry, ReleaseRecord};
pub use report::{NO_UPDATES_SUMMARY, Report, summarize};
pub use window::{DateParts, TimeWindow, iso_date};
