/// Page outcome definitions for a single fetch attempt
///
/// Every URL the crawler takes off the frontier ends in exactly one of these.
use crate::FetchError;
use std::fmt;

/// How a fetched page was resolved by the crawl loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was HTML and accepted into the visited set
    Accepted,

    // ===== Skips =====
    /// Page was already in the visited set
    AlreadyVisited,

    /// Page arrived after the budget ran out and was discarded
    OverBudget,

    // ===== Recovered errors =====
    /// Transport failure, timeout or HTTP status >= 400
    FetchFailed,

    /// Response Content-Type is not HTML
    NotHtml,
}

impl PageOutcome {
    /// Returns true if the page made it into the result
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns true if this represents a recovered per-page error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::NotHtml)
    }

    /// Maps a per-page fetch error to its outcome
    pub fn from_error(error: &FetchError) -> Self {
        match error {
            FetchError::UnsupportedContentType { .. } => Self::NotHtml,
            FetchError::Transport { .. } | FetchError::Timeout { .. } | FetchError::Status { .. } => {
                Self::FetchFailed
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::AlreadyVisited => "already_visited",
            Self::OverBudget => "over_budget",
            Self::FetchFailed => "fetch_failed",
            Self::NotHtml => "not_html",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_accepted() {
        assert!(PageOutcome::Accepted.is_accepted());

        assert!(!PageOutcome::AlreadyVisited.is_accepted());
        assert!(!PageOutcome::OverBudget.is_accepted());
        assert!(!PageOutcome::FetchFailed.is_accepted());
        assert!(!PageOutcome::NotHtml.is_accepted());
    }

    #[test]
    fn test_is_error() {
        assert!(PageOutcome::FetchFailed.is_error());
        assert!(PageOutcome::NotHtml.is_error());

        assert!(!PageOutcome::Accepted.is_error());
        assert!(!PageOutcome::OverBudget.is_error());
    }

    #[test]
    fn test_from_error() {
        let status = FetchError::Status {
            url: "http://a.com/".to_string(),
            status: 404,
        };
        assert_eq!(PageOutcome::from_error(&status), PageOutcome::FetchFailed);

        let timeout = FetchError::Timeout {
            url: "http://a.com/".to_string(),
        };
        assert_eq!(PageOutcome::from_error(&timeout), PageOutcome::FetchFailed);

        let content = FetchError::UnsupportedContentType {
            url: "http://a.com/logo.png".to_string(),
            content_type: "image/png".to_string(),
        };
        assert_eq!(PageOutcome::from_error(&content), PageOutcome::NotHtml);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PageOutcome::Accepted), "accepted");
        assert_eq!(format!("{}", PageOutcome::NotHtml), "not_html");
        assert_eq!(format!("{}", PageOutcome::OverBudget), "over_budget");
    }
}
