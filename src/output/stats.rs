//! Crawl statistics
//!
//! Counters gathered by the crawl loop and a log-friendly summary of them.

use crate::state::PageOutcome;
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Count of fetched pages by outcome
    pub pages_by_outcome: HashMap<PageOutcome, u64>,

    /// Raw `href` values seen on accepted pages
    pub links_seen: u64,

    /// Links that were internal and new, and went onto the frontier
    pub links_enqueued: u64,
}

impl CrawlStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one fetch attempt
    pub fn record(&mut self, outcome: PageOutcome) {
        *self.pages_by_outcome.entry(outcome).or_insert(0) += 1;
    }

    /// Number of pages that ended in `outcome`
    pub fn count(&self, outcome: PageOutcome) -> u64 {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of fetch attempts that completed
    pub fn total_pages(&self) -> u64 {
        self.pages_by_outcome.values().sum()
    }

    /// Number of recovered per-page errors
    pub fn total_errors(&self) -> u64 {
        self.pages_by_outcome
            .iter()
            .filter(|(outcome, _)| outcome.is_error())
            .map(|(_, count)| count)
            .sum()
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.total_pages();
        if total == 0 {
            return 0.0;
        }
        (self.count(PageOutcome::Accepted) as f64 / total as f64) * 100.0
    }
}

/// Logs statistics at info level in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Fetched {} pages: {} accepted, {} failed, {} not HTML, {} over budget",
        stats.total_pages(),
        stats.count(PageOutcome::Accepted),
        stats.count(PageOutcome::FetchFailed),
        stats.count(PageOutcome::NotHtml),
        stats.count(PageOutcome::OverBudget),
    );
    tracing::info!(
        "Links: {} seen, {} enqueued",
        stats.links_seen,
        stats.links_enqueued
    );
    tracing::info!(
        "Success Rate: {:.1}% ({} errors)",
        stats.success_rate(),
        stats.total_errors()
    );
}
