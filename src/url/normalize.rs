use url::Url;

/// Produces the canonical form of a link found on the page at `base`
///
/// # Canonicalization Steps
///
/// 1. Drop everything from the first `#` in `raw`
/// 2. Resolve what is left against `base` (absolute URLs pass through,
///    scheme-relative and path-relative ones are resolved)
/// 3. Serialize the result; an empty path serializes as `/`
///
/// This is best-effort: if `base` or `raw` can't be parsed, the
/// fragment-free `raw` is returned unchanged. Use [`try_canonicalize`] when
/// the caller needs to know.
///
/// # Examples
///
/// ```
/// use sitemap_gen::url::canonicalize;
///
/// assert_eq!(
///     canonicalize("http://test1.com", "/help.html#123"),
///     "http://test1.com/help.html"
/// );
/// ```
pub fn canonicalize(base: &str, raw: &str) -> String {
    match Url::parse(base) {
        Ok(base) => match try_canonicalize(&base, raw) {
            Some(url) => url.into(),
            None => strip_fragment(raw).to_string(),
        },
        Err(_) => strip_fragment(raw).to_string(),
    }
}

/// Resolves `raw` against an already parsed `base`, without its fragment
///
/// Returns `None` if the joined URL is invalid.
pub fn try_canonicalize(base: &Url, raw: &str) -> Option<Url> {
    let mut url = base.join(strip_fragment(raw)).ok()?;
    url.set_fragment(None);
    Some(url)
}

/// Returns the part of `raw` before its first `#`
fn strip_fragment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://test1.com/docs/index.html";

    #[test]
    fn test_root_relative_with_fragment() {
        assert_eq!(
            canonicalize("http://test1.com", "/help.html#123"),
            "http://test1.com/help.html"
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            canonicalize(BASE, "intro.html"),
            "http://test1.com/docs/intro.html"
        );
        assert_eq!(
            canonicalize(BASE, "../about"),
            "http://test1.com/about"
        );
    }

    #[test]
    fn test_scheme_relative_takes_base_scheme() {
        assert_eq!(
            canonicalize("https://test1.com/", "//test1.com/a"),
            "https://test1.com/a"
        );
    }

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            canonicalize(BASE, "https://other.com/page?x=1#top"),
            "https://other.com/page?x=1"
        );
    }

    #[test]
    fn test_canonical_url_round_trips() {
        for url in [
            "http://test1.com/",
            "http://test1.com/help.html",
            "https://example.com/a/b?q=1&r=2",
        ] {
            assert_eq!(canonicalize(BASE, url), url);
        }
    }

    #[test]
    fn test_seed_without_path_gains_root_slash() {
        assert_eq!(
            canonicalize("http://test1.com", "http://test1.com"),
            "http://test1.com/"
        );
    }

    #[test]
    fn test_fragment_only_resolves_to_base() {
        assert_eq!(canonicalize(BASE, "#section"), BASE);
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(canonicalize("not a base", "/page#x"), "/page");
        assert_eq!(canonicalize(BASE, "http://[::1"), "http://[::1");
    }

    #[test]
    fn test_try_canonicalize_reports_failure() {
        let base = Url::parse(BASE).unwrap();
        assert!(try_canonicalize(&base, "http://[::1").is_none());
        assert_eq!(
            try_canonicalize(&base, "/x#y").map(String::from),
            Some("http://test1.com/x".to_string())
        );
    }
}
