use crate::output::OutputFormat;
use serde::Deserialize;
use std::time::Duration;

/// Default number of pages accepted into a crawl
pub const DEFAULT_LIMIT: usize = 10;

/// Default number of concurrent fetch workers
pub const DEFAULT_WORKERS: usize = 4;

/// Default per-fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for sitemap-gen
///
/// Every section and key is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages accepted into the result
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Number of concurrent fetch-and-extract workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-fetch timeout (seconds)
    #[serde(rename = "fetch-timeout", default = "default_fetch_timeout")]
    pub fetch_timeout: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl CrawlerConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            workers: default_workers(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// File the visited pages are exported to
    pub path: Option<String>,

    /// Explicit output format; otherwise derived from `path`
    pub format: Option<OutputFormat>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
