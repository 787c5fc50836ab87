//! End-to-end digest run.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use daybook_config::Config;
use daybook_model::{Report, TimeWindow};
use daybook_render::{FormatterConfig, MarkdownFormatter, ReportFormatter};
use tracing::info;

use crate::{Assembler, CoreResult, ReportWriter};

/// Orchestrates collection, rendering and persistence.
pub struct Pipeline {
    assembler: Assembler,
    formatter: Box<dyn ReportFormatter>,
    formatter_config: FormatterConfig,
    writer: ReportWriter,
}

impl Pipeline {
    /// Creates a pipeline from its parts.
    #[must_use]
    pub fn new(
        assembler: Assembler,
        formatter: Box<dyn ReportFormatter>,
        formatter_config: FormatterConfig,
        writer: ReportWriter,
    ) -> Self {
        Self {
            assembler,
            formatter,
            formatter_config,
            writer,
        }
    }

    /// Creates a Markdown pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> CoreResult<Self> {
        let formatter_config = FormatterConfig::from_config(&config);
        let writer = ReportWriter::from_config(&config.output);
        let assembler = Assembler::new(config)?;

        Ok(Self::new(
            assembler,
            Box::new(MarkdownFormatter::new()),
            formatter_config,
            writer,
        ))
    }

    /// Returns the report writer.
    pub fn writer(&self) -> &ReportWriter {
        &self.writer
    }

    /// Collects the report for a window.
    pub async fn collect(&self, window: &TimeWindow) -> Report {
        self.assembler.assemble(window).await
    }

    /// Renders a report with the given generation time.
    pub fn render(&self, report: &Report, generated_at: DateTime<Utc>) -> String {
        self.formatter
            .format(report, generated_at, &self.formatter_config)
    }

    /// Collects, renders and writes the report for a window.
    ///
    /// Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns an error only if the report cannot be written.
    pub async fn run(&self, window: &TimeWindow) -> CoreResult<PathBuf> {
        let report = self.collect(window).await;
        let text = self.render(&report, Utc::now());
        let path = self.writer.write(&text, report.date)?;

        info!(path = %path.display(), formatter = self.formatter.name(), "report written");
        Ok(path)
    }
}
