//! HTML link extraction
//!
//! Pulls the raw `href` values out of anchor tags. No filtering or resolution
//! happens here; the crawl loop decides what each value means.

use scraper::{Html, Selector};

/// Extracts every anchor `href` value from an HTML document, in document order
///
/// Values are returned exactly as written in the markup. Anchors without an
/// `href` attribute are skipped; empty values are kept.
///
/// The parsed DOM is not `Send`, so the values are collected rather than
/// streamed.
///
/// # Example
///
/// ```
/// use sitemap_gen::crawler::extract_hrefs;
///
/// let html = r#"<a href="/help.html#123">help</a><a>no link</a><a href="mailto:x@y.z">mail</a>"#;
/// assert_eq!(extract_hrefs(html), vec!["/help.html#123", "mailto:x@y.z"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_relative_and_absolute() {
        let html = r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="page2">Link 2</a>
                <a href="https://other.com/page3">Link 3</a>
            </body>
            </html>
        "#;
        assert_eq!(
            extract_hrefs(html),
            vec!["/page1", "page2", "https://other.com/page3"]
        );
    }

    #[test]
    fn test_values_are_raw() {
        let html = r##"<a href="/help.html#123">help</a><a href="test1.com/help.html">help2</a>'"##;
        assert_eq!(
            extract_hrefs(html),
            vec!["/help.html#123", "test1.com/help.html"]
        );
    }

    #[test]
    fn test_mail_and_script_links_are_kept() {
        let html = r#"<a href="mailto:help@test2.com">mail</a><a href="javascript:void(0)">js</a>"#;
        assert_eq!(
            extract_hrefs(html),
            vec!["mailto:help@test2.com", "javascript:void(0)"]
        );
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Top</a><a href="">empty</a>"#;
        assert_eq!(extract_hrefs(html), vec![""]);
    }

    #[test]
    fn test_only_anchor_tags() {
        let html = r#"
            <link rel="stylesheet" href="/style.css">
            <link rel="canonical" href="/canonical">
            <img src="/logo.png">
            <script src="/app.js"></script>
        "#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_page_without_links() {
        assert!(extract_hrefs("help").is_empty());
        assert!(extract_hrefs("").is_empty());
    }
}
