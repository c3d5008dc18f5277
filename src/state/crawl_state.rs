//! Frontier, visited set and page budget for one crawl
//!
//! `CrawlState` has a single owner, the coordinator loop. Workers never touch
//! it; they hand their results back and the coordinator applies them here, so
//! every check-and-mark below is atomic without any locking.

use crate::output::CrawlStatistics;
use crate::state::PageOutcome;
use crate::url::canonicalize;
use crate::FetchError;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug)]
pub struct CrawlState {
    /// Canonical URLs waiting for a fetch attempt
    frontier: HashSet<String>,

    /// URLs that have been handed to a worker, whatever the result
    claimed: HashSet<String>,

    /// Pages accepted into the result
    visited: BTreeSet<String>,

    /// Pages that may still be accepted
    remaining: usize,

    /// Seed URL as given; it is visited and reported under this spelling
    seed_url: String,

    /// Canonical form of the seed, when it is spelled differently
    seed_alias: Option<String>,

    stats: CrawlStatistics,
}

impl CrawlState {
    /// Creates the state for a crawl starting at `start_url`
    ///
    /// Links that canonicalize to the seed (`http://a.com/` for a seed of
    /// `http://a.com`) are folded into the seed's own entry.
    pub fn new(start_url: String, limit: usize) -> Self {
        let canonical = canonicalize(&start_url, &start_url);
        let seed_alias = (canonical != start_url).then_some(canonical);

        Self {
            frontier: HashSet::from([start_url.clone()]),
            claimed: HashSet::new(),
            visited: BTreeSet::new(),
            remaining: limit,
            seed_url: start_url,
            seed_alias,
            stats: CrawlStatistics::new(),
        }
    }

    /// Removes a URL from the frontier and claims it for fetching
    ///
    /// Removal order is unspecified. URLs that are already claimed or
    /// visited are dropped on the way.
    pub fn next_url(&mut self) -> Option<String> {
        while let Some(url) = self.take_any() {
            if self.try_claim(&url) {
                return Some(url);
            }
            tracing::trace!("Skipping {}: already claimed", url);
        }
        None
    }

    fn take_any(&mut self) -> Option<String> {
        let url = self.frontier.iter().next()?.clone();
        self.frontier.take(&url)
    }

    /// Marks `url` as claimed if it has been neither claimed nor visited
    ///
    /// Returns true if the caller now owns the fetch of `url`.
    pub fn try_claim(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.claimed.insert(url.to_string())
    }

    /// Adds a canonical URL to the frontier
    ///
    /// Returns false if the URL was already queued, claimed or visited.
    pub fn enqueue(&mut self, url: String) -> bool {
        let url = self.fold_seed_alias(url);
        if self.visited.contains(&url) || self.claimed.contains(&url) {
            return false;
        }

        let added = self.frontier.insert(url);
        if added {
            self.stats.links_enqueued += 1;
        }
        added
    }

    fn fold_seed_alias(&self, url: String) -> String {
        match &self.seed_alias {
            Some(alias) if *alias == url => self.seed_url.clone(),
            _ => url,
        }
    }

    /// Accepts a fetched HTML page into the visited set
    ///
    /// Consumes one unit of budget on success. Pages that arrive after the
    /// budget is spent are discarded.
    pub fn accept(&mut self, url: &str) -> PageOutcome {
        let outcome = if self.visited.contains(url) {
            PageOutcome::AlreadyVisited
        } else if self.remaining == 0 {
            PageOutcome::OverBudget
        } else {
            self.visited.insert(url.to_string());
            self.remaining -= 1;
            PageOutcome::Accepted
        };

        self.stats.record(outcome);
        outcome
    }

    /// Records a page that failed to fetch or wasn't HTML
    pub fn reject(&mut self, error: &FetchError) -> PageOutcome {
        let outcome = PageOutcome::from_error(error);
        self.stats.record(outcome);
        outcome
    }

    pub fn record_link_seen(&mut self) {
        self.stats.links_seen += 1;
    }

    pub fn remaining_budget(&self) -> usize {
        self.remaining
    }

    pub fn is_budget_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn has_pending(&self) -> bool {
        !self.frontier.is_empty()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited(&self) -> &BTreeSet<String> {
        &self.visited
    }

    /// Consumes the state, returning the visited set and statistics
    pub fn finish(self) -> (BTreeSet<String>, CrawlStatistics) {
        (self.visited, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "http://test1.com/";

    #[test]
    fn test_new_state_holds_only_the_seed() {
        let mut state = CrawlState::new(SEED.to_string(), 5);
        assert_eq!(state.frontier_len(), 1);
        assert_eq!(state.remaining_budget(), 5);
        assert_eq!(state.next_url().as_deref(), Some(SEED));
        assert_eq!(state.next_url(), None);
    }

    #[test]
    fn test_enqueue_is_idempotent() {
        let mut state = CrawlState::new(SEED.to_string(), 5);
        assert!(state.enqueue("http://test1.com/a".to_string()));
        assert!(!state.enqueue("http://test1.com/a".to_string()));
        assert_eq!(state.frontier_len(), 2);
    }

    #[test]
    fn test_claimed_url_is_not_requeued() {
        let mut state = CrawlState::new(SEED.to_string(), 5);
        let url = state.next_url().unwrap();
        assert!(!state.enqueue(url));
        assert!(!state.has_pending());
    }

    #[test]
    fn test_visited_url_is_not_requeued() {
        let mut state = CrawlState::new(SEED.to_string(), 5);
        let url = state.next_url().unwrap();
        assert_eq!(state.accept(&url), PageOutcome::Accepted);
        assert!(!state.enqueue(url.clone()));
        assert!(!state.try_claim(&url));
    }

    #[test]
    fn test_seed_keeps_its_given_spelling() {
        let mut state = CrawlState::new("http://test1.com".to_string(), 5);
        let seed = state.next_url().unwrap();
        assert_eq!(seed, "http://test1.com");

        assert!(!state.enqueue("http://test1.com/".to_string()));
        assert_eq!(state.accept(&seed), PageOutcome::Accepted);
        assert!(!state.enqueue("http://test1.com/".to_string()));
        assert_eq!(
            state.visited().iter().collect::<Vec<_>>(),
            vec!["http://test1.com"]
        );
    }

    #[test]
    fn test_try_claim_only_once() {
        let mut state = CrawlState::new(SEED.to_string(), 5);
        assert!(state.try_claim("http://test1.com/x"));
        assert!(!state.try_claim("http://test1.com/x"));
    }

    #[test]
    fn test_accept_consumes_budget() {
        let mut state = CrawlState::new(SEED.to_string(), 2);
        assert_eq!(state.accept("http://test1.com/a"), PageOutcome::Accepted);
        assert_eq!(state.remaining_budget(), 1);
        assert_eq!(state.accept("http://test1.com/a"), PageOutcome::AlreadyVisited);
        assert_eq!(state.remaining_budget(), 1);
        assert_eq!(state.accept("http://test1.com/b"), PageOutcome::Accepted);
        assert!(state.is_budget_exhausted());
        assert_eq!(state.accept("http://test1.com/c"), PageOutcome::OverBudget);
        assert_eq!(state.visited().len(), 2);
    }

    #[test]
    fn test_reject_does_not_consume_budget() {
        let mut state = CrawlState::new(SEED.to_string(), 1);
        let error = FetchError::Status {
            url: SEED.to_string(),
            status: 404,
        };
        assert_eq!(state.reject(&error), PageOutcome::FetchFailed);
        assert_eq!(state.remaining_budget(), 1);
        assert!(state.visited().is_empty());
    }

    #[test]
    fn test_finish_returns_visited_and_stats() {
        let mut state = CrawlState::new(SEED.to_string(), 3);
        let url = state.next_url().unwrap();
        state.accept(&url);
        state.record_link_seen();
        state.enqueue("http://test1.com/next".to_string());

        let (visited, stats) = state.finish();
        assert_eq!(visited.into_iter().collect::<Vec<_>>(), vec![SEED]);
        assert_eq!(stats.count(PageOutcome::Accepted), 1);
        assert_eq!(stats.links_seen, 1);
        assert_eq!(stats.links_enqueued, 1);
    }
}
