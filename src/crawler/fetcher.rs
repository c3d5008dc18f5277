//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `Fetcher` seam the crawl loop fetches through
//! - Building the reqwest client with the configured user agent and timeouts
//! - Gating responses on status code and Content-Type

use crate::config::CrawlerConfig;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{header, Client};
use std::borrow::Cow;
use std::time::Duration;

/// Content types treated as HTML documents
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// A response as seen by the crawl loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,

    /// Content-Type header value, empty if absent
    pub content_type: String,

    /// Page body content
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// A `200 OK` HTML response
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, "text/html; charset=utf-8", body)
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Fetches a single URL
///
/// Implementations return `Ok` for any response the server produced,
/// whatever its status, and `Err` only for transport failures. Status and
/// Content-Type gating is applied afterwards by [`check_response`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// `Fetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_gen::config::CrawlerConfig;
/// use sitemap_gen::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.fetch_timeout())
        .connect_timeout(Duration::from_secs(10).min(config.fetch_timeout()))
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // The body is only read for pages that will be parsed.
        if status >= 400 || !is_html(&content_type) {
            return Ok(FetchResponse::new(status, content_type, Vec::new()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        Ok(FetchResponse::new(status, content_type, body.to_vec()))
    }
}

fn transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Returns true if a Content-Type header value denotes an HTML document
pub fn is_html(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    HTML_CONTENT_TYPES.contains(&mime.as_str())
}

/// Applies status and Content-Type gating to a response
///
/// | Condition | Result |
/// |-----------|--------|
/// | status >= 400 | `FetchError::Status` |
/// | Content-Type not HTML | `FetchError::UnsupportedContentType` |
/// | otherwise | the response, ready for link extraction |
pub fn check_response(url: &str, response: FetchResponse) -> Result<FetchResponse, FetchError> {
    if response.status >= 400 {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }

    if !is_html(&response.content_type) {
        return Err(FetchError::UnsupportedContentType {
            url: url.to_string(),
            content_type: response.content_type,
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&CrawlerConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("TEXT/HTML;charset=ISO-8859-1"));
        assert!(is_html("application/xhtml+xml"));

        assert!(!is_html(""));
        assert!(!is_html("application/json"));
        assert!(!is_html("text/plain"));
        assert!(!is_html("image/png"));
    }

    #[test]
    fn test_check_response_accepts_html() {
        let response = FetchResponse::html("<a href=\"/\">home</a>");
        let checked = check_response("http://a.com/", response.clone()).unwrap();
        assert_eq!(checked, response);
    }

    #[test]
    fn test_check_response_accepts_redirect_status() {
        let response = FetchResponse::new(304, "text/html", "");
        assert!(check_response("http://a.com/", response).is_ok());
    }

    #[test]
    fn test_check_response_rejects_error_status() {
        for status in [400, 404, 500, 503] {
            let response = FetchResponse::new(status, "text/html", "");
            let result = check_response("http://a.com/", response);
            assert!(
                matches!(result, Err(FetchError::Status { status: s, .. }) if s == status),
                "status {} should be rejected",
                status
            );
        }
    }

    #[test]
    fn test_check_response_rejects_non_html() {
        let response = FetchResponse::new(200, "application/pdf", "%PDF");
        let result = check_response("http://a.com/doc.pdf", response);
        assert!(matches!(
            result,
            Err(FetchError::UnsupportedContentType { content_type, .. }) if content_type == "application/pdf"
        ));
    }

    #[test]
    fn test_status_checked_before_content_type() {
        let response = FetchResponse::new(404, "text/plain", "404 Not Found");
        assert!(matches!(
            check_response("http://a.com/missing", response),
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_text_replaces_invalid_utf8() {
        let response = FetchResponse::html(vec![b'a', 0xff, b'b']);
        assert_eq!(response.text(), "a\u{fffd}b");
    }
}
