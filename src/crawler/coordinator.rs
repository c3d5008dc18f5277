//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator is the single owner of the crawl state. It:
//! - Claims URLs from the frontier and hands them to a fixed pool of workers
//! - Applies each worker's result (accept, skip, enqueue links)
//! - Stops dispatching when the budget runs out or the crawl is cancelled
//!
//! Workers only fetch, gate and extract; they never see the frontier or the
//! visited set.

use crate::config::{CrawlerConfig, SeedConfig};
use crate::crawler::fetcher::{check_response, Fetcher, HttpFetcher};
use crate::crawler::parser::extract_hrefs;
use crate::output::CrawlStatistics;
use crate::state::{CrawlState, PageOutcome};
use crate::url::{is_internal, try_canonicalize};
use crate::{FetchError, SitemapError};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Result of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Canonical URLs of every accepted page
    pub visited: BTreeSet<String>,

    /// Counters gathered during the crawl
    pub stats: CrawlStatistics,

    /// True if the crawl was stopped through its cancellation token
    pub cancelled: bool,
}

/// What a worker brings back for one URL
#[derive(Debug)]
struct PageVisit {
    url: String,
    result: Result<Vec<String>, FetchError>,
}

/// Same-origin crawler for a single seed
pub struct Crawler {
    seed: SeedConfig,
    settings: CrawlerConfig,
    fetcher: Arc<dyn Fetcher>,
    cancel: CancellationToken,
}

impl Crawler {
    /// Creates a crawler that fetches through `fetcher`
    pub fn new(seed: SeedConfig, settings: CrawlerConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            seed,
            settings,
            fetcher,
            cancel: CancellationToken::new(),
        }
    }

    /// Creates a crawler that fetches over HTTP with reqwest
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(SitemapError)` - The HTTP client could not be built
    pub fn with_http_client(seed: SeedConfig, settings: CrawlerConfig) -> Result<Self, SitemapError> {
        let fetcher = HttpFetcher::new(&settings)?;
        Ok(Self::new(seed, settings, Arc::new(fetcher)))
    }

    /// Token that cancels this crawler's runs
    ///
    /// Once cancelled, dispatching stops on the next scheduling tick and
    /// in-flight fetches are aborted.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the crawl loop to completion
    ///
    /// Each run starts from a fresh frontier holding only the seed URL, as
    /// given. The loop ends when the frontier is empty and no fetch is in
    /// flight, when the budget is spent and in-flight fetches have drained, or
    /// when the cancellation token fires. Per-page failures are logged and skipped.
    pub async fn run(&self) -> CrawlReport {
        let base_url = self.seed.base_url();
        let mut state = CrawlState::new(base_url.to_string(), self.seed.limit());

        let workers = self.settings.workers.max(1);
        let timeout = self.settings.fetch_timeout();
        let mut in_flight: JoinSet<PageVisit> = JoinSet::new();
        let mut cancelled = false;
        let start_time = Instant::now();

        tracing::info!(
            "Starting crawl of {} (origin {}, limit {}, {} workers)",
            base_url,
            self.seed.origin_host(),
            self.seed.limit(),
            workers
        );

        loop {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            // Top up the worker pool
            while in_flight.len() < workers && !state.is_budget_exhausted() {
                let Some(url) = state.next_url() else {
                    break;
                };
                tracing::debug!("Fetching {}", url);
                in_flight.spawn(visit_page(Arc::clone(&self.fetcher), url, timeout));
            }

            if in_flight.is_empty() {
                break;
            }

            tokio::select! {
                joined = in_flight.join_next() => match joined {
                    Some(Ok(visit)) => self.handle_visit(&mut state, visit),
                    Some(Err(e)) => tracing::warn!("Fetch task failed: {}", e),
                    None => {}
                },
                _ = self.cancel.cancelled() => {
                    cancelled = true;
                    break;
                }
            }
        }

        if cancelled {
            tracing::info!(
                "Crawl cancelled, aborting {} in-flight fetches",
                in_flight.len()
            );
            in_flight.shutdown().await;
        } else if state.is_budget_exhausted() && state.has_pending() {
            tracing::info!(
                "Page limit reached with {} URLs left in frontier",
                state.frontier_len()
            );
        } else {
            tracing::info!("Frontier is empty, crawl complete");
        }

        let (visited, stats) = state.finish();

        tracing::info!(
            "Crawl finished: {} pages visited in {:?}",
            visited.len(),
            start_time.elapsed()
        );

        CrawlReport {
            visited,
            stats,
            cancelled,
        }
    }

    /// Applies one worker result to the crawl state
    fn handle_visit(&self, state: &mut CrawlState, visit: PageVisit) {
        let hrefs = match visit.result {
            Ok(hrefs) => hrefs,
            Err(error) => {
                match state.reject(&error) {
                    PageOutcome::NotHtml => tracing::trace!("Skipping {}: {}", visit.url, error),
                    _ => tracing::debug!("Page {} not accessible: {}", visit.url, error),
                }
                return;
            }
        };

        let outcome = state.accept(&visit.url);
        if !outcome.is_accepted() {
            tracing::debug!("Discarding {}: {}", visit.url, outcome);
            return;
        }

        let accepted = state.visited().len();
        tracing::debug!(
            "Accepted {} ({} of {})",
            visit.url,
            accepted,
            self.seed.limit()
        );
        if accepted % 10 == 0 {
            tracing::info!(
                "Progress: {} pages visited, {} in frontier",
                accepted,
                state.frontier_len()
            );
        }

        if state.is_budget_exhausted() {
            tracing::debug!(
                "Budget spent, dropping {} links from {}",
                hrefs.len(),
                visit.url
            );
            return;
        }

        let page_url = match Url::parse(&visit.url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Cannot resolve links on {}: {}", visit.url, e);
                return;
            }
        };

        for href in &hrefs {
            self.follow_link(state, &page_url, href);
        }
    }

    /// Queues a raw link if it stays on the seed's origin
    fn follow_link(&self, state: &mut CrawlState, page_url: &Url, href: &str) {
        let href = href.trim();
        if href.is_empty() {
            return;
        }
        state.record_link_seen();

        if !is_internal(self.seed.origin_host(), href) {
            tracing::trace!("Ignoring external link {}", href);
            return;
        }

        match try_canonicalize(page_url, href) {
            Some(url) => {
                let url = String::from(url);
                if state.enqueue(url.clone()) {
                    tracing::trace!("Queued {}", url);
                }
            }
            None => tracing::debug!("Failed to canonicalize {}", href),
        }
    }
}

/// Fetches one URL, gates the response and extracts its links
async fn visit_page(fetcher: Arc<dyn Fetcher>, url: String, timeout: Duration) -> PageVisit {
    let result = match tokio::time::timeout(timeout, fetcher.fetch(&url)).await {
        Ok(Ok(response)) => {
            check_response(&url, response).map(|page| extract_hrefs(&page.text()))
        }
        Ok(Err(error)) => Err(error),
        Err(_) => Err(FetchError::Timeout { url: url.clone() }),
    };

    PageVisit { url, result }
}

/// Runs a crawl over HTTP with the given seed and settings
///
/// # Example
///
/// ```no_run
/// use sitemap_gen::config::{CrawlerConfig, SeedConfig};
/// use sitemap_gen::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = SeedConfig::new("example.com", 10)?;
/// let report = run_crawl(seed, CrawlerConfig::default()).await?;
/// println!("{} pages", report.visited.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(seed: SeedConfig, settings: CrawlerConfig) -> Result<CrawlReport, SitemapError> {
    let crawler = Crawler::with_http_client(seed, settings)?;
    Ok(crawler.run().await)
}

/// Crawls `base_url` over HTTP with default settings and returns the visited pages
///
/// Fails only if the seed URL is empty or malformed, before any request is
/// made.
pub async fn crawl(base_url: &str, limit: usize) -> Result<BTreeSet<String>, SitemapError> {
    let seed = SeedConfig::new(base_url, limit)?;
    let report = run_crawl(seed, CrawlerConfig::default()).await?;
    Ok(report.visited)
}
