use crate::url::origin_of;
use url::Url;

const MAILTO_PREFIX: &str = "mailto:";

/// Decides whether a raw `href` stays on the crawl's origin
///
/// A link is internal if either:
/// - it is root-relative (`/path`), or
/// - it parses as an absolute URL whose origin host equals `origin_host`
///   and it does not start with `mailto:`.
///
/// The `mailto:` exclusion only applies to the absolute branch; a
/// root-relative link is always internal. Scheme-relative links (`//host/path`)
/// are not root-relative and are judged by their host. Path-relative links
/// (`page.html`, `test1.com/page.html`) have no host and are never internal.
///
/// # Examples
///
/// ```
/// use sitemap_gen::url::is_internal;
///
/// assert!(is_internal("test1.com", "/help.html#123"));
/// assert!(is_internal("test1.com", "http://test1.com/about"));
/// assert!(!is_internal("test1.com", "test1.com/help.html"));
/// assert!(!is_internal("test1.com", "mailto:help@test1.com"));
/// ```
pub fn is_internal(origin_host: &str, raw_href: &str) -> bool {
    if is_root_relative(raw_href) {
        return true;
    }

    !is_mail_link(raw_href) && link_origin(raw_href).is_some_and(|host| host == origin_host)
}

fn is_root_relative(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

fn is_mail_link(href: &str) -> bool {
    href.get(..MAILTO_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MAILTO_PREFIX))
}

/// Origin host of an absolute or scheme-relative link
fn link_origin(href: &str) -> Option<String> {
    let parsed = if href.starts_with("//") {
        Url::parse(&format!("http:{}", href))
    } else {
        Url::parse(href)
    };
    parsed.ok().as_ref().and_then(origin_of)
}
