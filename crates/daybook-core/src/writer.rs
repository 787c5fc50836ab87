//! Date-partitioned report persistence.
//!
//! Reports are stored one file per calendar date:
//! ```text
//! daily/
//! └── 2025/
//!     └── 03/
//!         ├── 06.md
//!         └── 07.md
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use daybook_config::OutputConfig;
use daybook_model::DateParts;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Writes rendered reports under `<root>/<year>/<month>/<day>.<ext>`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
    extension: String,
}

impl ReportWriter {
    /// Creates a writer rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Creates a writer from the output configuration.
    #[must_use]
    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.root, output.extension.trim_start_matches('.'))
    }

    /// Returns the file path for a date.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        let day = DateParts::from_date(date).day;
        self.dir_for(date).join(format!("{day}.{}", self.extension))
    }

    fn dir_for(&self, date: NaiveDate) -> PathBuf {
        let parts = DateParts::from_date(date);
        self.root.join(parts.year).join(parts.month)
    }

    /// Writes `text` as the report for `date`, replacing any previous report.
    ///
    /// Missing parent directories are created. The text is written to a
    /// temporary file in the target directory and renamed into place, so the
    /// previous report stays intact if writing fails.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Write`] if a directory or the file cannot be written.
    pub fn write(&self, text: &str, date: NaiveDate) -> CoreResult<PathBuf> {
        let dir = self.dir_for(date);
        let path = self.path_for(date);

        let write_err = |path: &PathBuf| {
            let path = path.clone();
            move |source| CoreError::Write { path, source }
        };

        fs::create_dir_all(&dir).map_err(write_err(&dir))?;

        let mut file = NamedTempFile::new_in(&dir).map_err(write_err(&dir))?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(write_err(&path))?;
        file.persist(&path).map_err(|err| CoreError::Write {
            path: path.clone(),
            source: err.error,
        })?;

        debug!(path = %path.display(), bytes = text.len(), "wrote report");
        Ok(path)
    }
}
