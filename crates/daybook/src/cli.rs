//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};

use daybook_config::{Config, find_and_load_config, load_config};
use daybook_core::Pipeline;
use daybook_model::TimeWindow;

/// Compile a daily Markdown digest of repository, documentation and
/// release-note activity.
#[derive(Debug, Parser)]
#[command(name = "daybook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: nearest daybook.toml)
    #[arg(short, long, env = "DAYBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output root directory, overriding [output].root
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the report instead of writing it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs a digest for the 24 hours ending now.
    pub fn run(self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!(repository = %config.repository.slug(), "configuration loaded");

        let pipeline = Pipeline::from_config(config).context("failed to initialize pipeline")?;

        let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
        rt.block_on(async {
            let window = TimeWindow::now();

            if self.dry_run {
                let report = pipeline.collect(&window).await;
                let text = pipeline.render(&report, Utc::now());
                info!(
                    path = %pipeline.writer().path_for(report.date).display(),
                    "dry run, report not written"
                );
                print!("{text}");
                return Ok(());
            }

            let path = pipeline.run(&window).await.context("failed to write report")?;
            println!("{}", path.display());
            Ok::<_, anyhow::Error>(())
        })
    }

    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => find_and_load_config().context("failed to load config")?,
        };

        if let Some(dir) = &self.output_dir {
            config.output.root = dir.display().to_string();
        }

        Ok(config)
    }
}
