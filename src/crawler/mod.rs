//! Crawler module for same-origin traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and response gating
//! - HTML link extraction
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{crawl, run_crawl, CrawlReport, Crawler};
pub use fetcher::{
    build_http_client, check_response, is_html, FetchResponse, Fetcher, HttpFetcher,
};
pub use parser::extract_hrefs;
