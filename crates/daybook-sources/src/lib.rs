//! Remote source fetchers for Daybook.
//!
//! Each fetcher calls one endpoint and always resolves to a collection:
//! upstream failures are logged and replaced by an empty result, so callers
//! never handle errors from this crate's `fetch_*` functions.
//!
//! - [`github`]: commits, releases and merged pull requests
//! - [`docs`]: documentation pages linked from an index page
//! - [`notes`]: headings of a release notes page

mod client;
pub mod docs;
pub mod error;
pub mod github;
pub mod notes;

pub use client::SourceClient;
pub use docs::fetch_doc_pages;
pub use error::{SourceError, SourceResult};
pub use github::{fetch_commits, fetch_pull_requests, fetch_releases};
pub use notes::fetch_release_notes;
