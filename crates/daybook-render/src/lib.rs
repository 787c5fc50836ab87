//! Report formatters for Daybook.
//!
//! - [`ReportFormatter`]: turns a [`daybook_model::Report`] into text
//! - [`MarkdownFormatter`]: the Markdown digest written to disk

mod formatter;
mod markdown;

pub use formatter::{FormatterConfig, ReportFormatter};
pub use markdown::MarkdownFormatter;
