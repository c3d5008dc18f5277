//! Output format selection

use crate::output::csv::render_csv;
use crate::output::sitemap::render_sitemap;
use serde::Deserialize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Supported export formats
///
/// `Xml` is the default for any file name whose extension isn't recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One-column CSV with a `url` header
    Csv,
    /// sitemaps.org XML sitemap
    #[default]
    Xml,
}

impl OutputFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Recognizes an extension (case-insensitive, without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else {
            None
        }
    }

    /// Picks the format for a file name
    ///
    /// `.csv` and `.xml` files keep their name. Anything else is written as
    /// XML with `.xml` appended (`out` → `out.xml`, `out.txt` → `out.txt.xml`).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use sitemap_gen::OutputFormat;
    ///
    /// assert_eq!(
    ///     OutputFormat::for_path(Path::new("out.csv")),
    ///     (PathBuf::from("out.csv"), OutputFormat::Csv)
    /// );
    /// assert_eq!(
    ///     OutputFormat::for_path(Path::new("out")),
    ///     (PathBuf::from("out.xml"), OutputFormat::Xml)
    /// );
    /// ```
    pub fn for_path(path: &Path) -> (PathBuf, Self) {
        match Self::of_path(path) {
            Some(format) => (path.to_path_buf(), format),
            None => (Self::Xml.apply_to(path), Self::Xml),
        }
    }

    /// Returns `path` carrying this format's extension, appending it if needed
    pub fn apply_to(&self, path: &Path) -> PathBuf {
        if Self::of_path(path) == Some(*self) {
            return path.to_path_buf();
        }
        let mut name = OsString::from(path.as_os_str());
        name.push(".");
        name.push(self.extension());
        PathBuf::from(name)
    }

    fn of_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Renders URLs in this format
    pub fn render(&self, urls: &[String]) -> Result<String, csv::Error> {
        match self {
            Self::Csv => render_csv(urls),
            Self::Xml => Ok(render_sitemap(urls)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
