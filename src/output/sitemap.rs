//! XML sitemap rendering
//!
//! Produces a `<urlset>` document following the sitemaps.org 0.9 protocol,
//! with one `<url><loc>` entry per page.

/// Namespace of the sitemaps.org 0.9 schema
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders URLs as an XML sitemap
///
/// Each URL is entity-escaped inside its `<loc>` element.
pub fn render_sitemap(urls: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            html_escape::encode_quoted_attribute(url)
        ));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
