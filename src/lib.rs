//! sitemap-gen: a same-origin site mapper
//!
//! This crate walks every page reachable from a seed URL on a single host, up to
//! a page budget, and exports the set of visited pages as a CSV list or an XML
//! sitemap.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for sitemap-gen operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Seed URL is missing or empty")]
    MissingSeed,

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

/// Per-page failures. These are absorbed by the crawl loop and never
/// surface to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Unsupported content type {content_type:?} for {url}")]
    UnsupportedContentType { url: String, content_type: String },
}

/// Result type alias for sitemap-gen operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, SeedConfig};
pub use crawler::{crawl, CrawlReport, Crawler, Fetcher};
pub use output::{Exporter, OutputFormat};
pub use url::{canonicalize, is_internal};
