//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: owns the frontier, the visited set and the page budget
//! - `PageOutcome`: how a single fetch attempt was resolved

mod crawl_state;
mod page_state;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_state::PageOutcome;
