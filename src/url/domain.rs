use url::Url;

/// Extracts the origin host of a URL
///
/// The origin host is the lowercase host, followed by `:port` when the URL
/// carries a port other than its scheme's default. Two URLs share an origin
/// host exactly when this function returns the same string for both.
///
/// # Arguments
///
/// * `url` - The URL to extract the origin host from
///
/// # Returns
///
/// * `Some(String)` - The origin host
/// * `None` - If the URL has no host (e.g. `mailto:` or `data:` URLs)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_gen::url::origin_of;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(origin_of(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_of(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn origin_of(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}
