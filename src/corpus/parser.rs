//! HTML parser for extracting corpus links
//!
//! Only `<a href="...">` targets count. A target is kept when it resolves to
//! a file directly inside the corpus directory; it is reported by file name.

use crate::corpus::PageId;
use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use url::Url;

/// Extracts the link targets of an HTML page
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - `file:` URL of the corpus directory (with a trailing slash)
///
/// # Returns
///
/// File names of the linked pages, in document order. Targets are not
/// checked against the corpus; see [`crate::Corpus::from_links`].
///
/// # Example
///
/// ```
/// use linkrank::corpus::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="2.html">Two</a></body></html>"#;
/// let base_url = Url::parse("file:///corpus/").unwrap();
/// assert_eq!(extract_links(html, &base_url), vec!["2.html".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<PageId> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(page) = resolve_link(href, base_url) {
                    links.push(page);
                }
            }
        }
    }

    links
}

/// Resolves a link href to a page name inside the corpus directory
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only anchors
/// - anything outside the corpus directory (other schemes, subdirectories)
fn resolve_link(href: &str, base_url: &Url) -> Option<PageId> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut target = base_url.join(href).ok()?;
    if target.scheme() != "file" {
        return None;
    }
    target.set_fragment(None);
    target.set_query(None);

    let relative = base_url.make_relative(&target)?;
    if relative.is_empty() || relative.contains('/') {
        return None;
    }
    // Page names are raw file names, URL paths are percent-encoded
    let page = percent_decode_str(&relative).decode_utf8().ok()?;
    if page.contains('/') {
        return None;
    }
    Some(page.into_owned())
}
