//! Core library for Daybook.
//!
//! This crate provides the orchestration of a digest run: concurrent
//! collection of all sources, rendering, and date-partitioned persistence.

mod assembler;
mod error;
mod pipeline;
mod writer;

pub use assembler::Assembler;
pub use error::{CoreError, CoreResult};
pub use pipeline::Pipeline;
pub use writer::ReportWriter;
