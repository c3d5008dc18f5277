//! Configuration module for sitemap-gen
//!
//! This module handles the per-crawl seed (`SeedConfig`) and the optional TOML
//! settings file that tunes the worker pool, timeouts and output.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_gen::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap.toml")).unwrap();
//! println!("Crawler will accept at most {} pages", config.crawler.limit);
//! ```

mod parser;
mod seed;
mod types;
mod validation;

pub use parser::{load_config, parse_config};
pub use seed::SeedConfig;
pub use types::{
    Config, CrawlerConfig, OutputConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LIMIT,
    DEFAULT_WORKERS,
};
pub use validation::{validate, validate_crawler_config};
