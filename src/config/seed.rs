use crate::url::origin_of;
use crate::ConfigError;
use url::Url;

/// Immutable description of a single crawl: where it starts, which origin it
/// is confined to, and how many pages it may accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    base_url: String,
    origin_host: String,
    limit: usize,
}

impl SeedConfig {
    /// Builds a seed from a user-supplied URL and page limit
    ///
    /// A seed without a scheme gets `http://` prepended and any fragment is
    /// dropped; the URL is otherwise kept as given. The origin host is taken
    /// from the resulting URL once and never recomputed.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingSeed` - the URL is empty or only whitespace
    /// * `ConfigError::InvalidSeed` - the URL can't be parsed, isn't HTTP(S),
    ///   or has no host
    /// * `ConfigError::Validation` - the limit is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemap_gen::SeedConfig;
    ///
    /// let seed = SeedConfig::new("www.test.com", 10).unwrap();
    /// assert_eq!(seed.base_url(), "http://www.test.com");
    /// assert_eq!(seed.origin_host(), "www.test.com");
    /// ```
    pub fn new(base_url: &str, limit: usize) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingSeed);
        }

        if limit == 0 {
            return Err(ConfigError::Validation(
                "limit must be greater than zero".to_string(),
            ));
        }

        let base_url = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
        let base_url = match base_url.split_once('#') {
            Some((head, _)) => head.to_string(),
            None => base_url,
        };

        let parsed = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidSeed(format!("{}: {}", base_url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidSeed(format!(
                "{}: only http and https are supported",
                base_url
            )));
        }

        let origin_host = origin_of(&parsed)
            .ok_or_else(|| ConfigError::InvalidSeed(format!("{}: missing host", base_url)))?;

        Ok(Self {
            base_url,
            origin_host,
            limit,
        })
    }

    /// The seed URL, with a scheme
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host (and explicit port, if any) every internal link must share
    pub fn origin_host(&self) -> &str {
        &self.origin_host
    }

    /// Maximum number of pages the crawl may accept
    pub fn limit(&self) -> usize {
        self.limit
    }
}
