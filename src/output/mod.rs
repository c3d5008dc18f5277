//! Output module for exporting crawl results
//!
//! This module handles:
//! - Picking an export format and file name from the CLI options
//! - Writing the visited set as CSV or as an XML sitemap
//! - Recording crawl statistics

mod csv;
mod format;
mod sitemap;
pub mod stats;

pub use self::csv::{render_csv, CSV_HEADER};
pub use format::OutputFormat;
pub use sitemap::{render_sitemap, SITEMAP_NAMESPACE};
pub use stats::{log_statistics, CrawlStatistics};

use crate::ConfigError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name stem used when only a format is given
pub const DEFAULT_OUTPUT_STEM: &str = "sitemap";

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Invalid export target: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Writes a set of URLs to a file in one of the supported formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exporter {
    path: PathBuf,
    format: OutputFormat,
}

impl Exporter {
    /// Creates an exporter whose format follows the file extension
    ///
    /// `out.csv` is written as CSV. Any other name is written as XML, with
    /// `.xml` appended unless it is already there.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let (path, format) = OutputFormat::for_path(path.as_ref());
        Self { path, format }
    }

    /// Creates an exporter with an explicit format
    ///
    /// The format's extension is appended when the file name doesn't already
    /// carry it.
    pub fn with_format(path: impl AsRef<Path>, format: OutputFormat) -> Self {
        Self {
            path: format.apply_to(path.as_ref()),
            format,
        }
    }

    /// Resolves the export target from the optional CLI/config values
    ///
    /// | path | format | target |
    /// |------|--------|--------|
    /// | given | none | format from the extension |
    /// | none | given | `sitemap.<ext>` |
    /// | given | given | path with the format's extension |
    /// | none | none | no export |
    pub fn from_options(path: Option<&Path>, format: Option<OutputFormat>) -> Option<Self> {
        match (path, format) {
            (Some(path), None) => Some(Self::new(path)),
            (None, Some(format)) => Some(Self::with_format(DEFAULT_OUTPUT_STEM, format)),
            (Some(path), Some(format)) => Some(Self::with_format(path, format)),
            (None, None) => None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes `urls` to the target file
    ///
    /// # Returns
    ///
    /// * `Ok(Some(path))` - The file that was written
    /// * `Ok(None)` - There was nothing to export; no file was created
    /// * `Err(ExportError)` - Failed to write the file
    pub fn export<I, S>(&self, urls: I) -> ExportResult<Option<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();

        if urls.is_empty() {
            tracing::warn!("Nothing to export, skipping {}", self.path.display());
            return Ok(None);
        }

        if self.path.file_stem().is_none() {
            return Err(ConfigError::Validation(format!(
                "output path {} has no file name",
                self.path.display()
            ))
            .into());
        }

        let content = self.format.render(&urls)?;
        fs::write(&self.path, content).map_err(|source| ExportError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            "Exported {} URLs as {} to {}",
            urls.len(),
            self.format,
            self.path.display()
        );

        Ok(Some(self.path.clone()))
    }
}
