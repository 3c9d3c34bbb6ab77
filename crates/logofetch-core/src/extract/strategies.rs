//! The individual extraction strategies.
//!
//! Each function walks one aspect of the document and returns raw
//! references in priority order. Absolutization and dedup happen in the
//! caller.

use regex::Regex;
use scraper::{Html, Selector};

use super::first_srcset_url;

/// The `og:image` meta content, or the `twitter:image` one when no
/// `og:image` tag exists. Yields at most one reference.
pub(crate) fn meta_image_refs(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("meta") else {
        return Vec::new();
    };

    for wanted in ["og:image", "twitter:image"] {
        for meta in document.select(&sel) {
            let key = meta
                .value()
                .attr("property")
                .or_else(|| meta.value().attr("name"))
                .unwrap_or("");
            if !key.eq_ignore_ascii_case(wanted) {
                continue;
            }
            let content = meta.value().attr("content").unwrap_or("").trim();
            if !content.is_empty() {
                return vec![content.to_string()];
            }
        }
    }
    Vec::new()
}

/// `link` hrefs whose `rel` equals `image_src` or mentions `icon` or
/// `apple-touch-icon`, in document order.
pub(crate) fn link_icon_refs(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("link[rel][href]") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for link in document.select(&sel) {
        let rel = link.value().attr("rel").unwrap_or("").to_ascii_lowercase();
        let wanted =
            rel == "image_src" || rel.contains("icon") || rel.contains("apple-touch-icon");
        if !wanted {
            continue;
        }
        let href = link.value().attr("href").unwrap_or("").trim();
        if !href.is_empty() {
            out.push(href.to_string());
        }
    }
    out
}

/// `img` sources in document order: `src` first, then the first `srcset`
/// entry of the same element.
pub(crate) fn img_refs(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("img") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for img in document.select(&sel) {
        let src = img.value().attr("src").unwrap_or("").trim();
        if !src.is_empty() {
            out.push(src.to_string());
        }
        if let Some(srcset) = img.value().attr("srcset") {
            if let Some(first) = first_srcset_url(srcset) {
                out.push(first);
            }
        }
    }
    out
}

/// Image URLs mentioned anywhere in JSON-LD script blocks.
///
/// The blocks are scanned as raw text rather than parsed as JSON; a URL
/// only counts if it ends in a supported image extension.
pub(crate) fn json_ld_refs(document: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };
    let url_re = Regex::new(r#"(?i)https?://[^\s"'<>\\]+\.(?:png|jpe?g|svg)"#)
        .expect("static regex compiles");

    let mut out = Vec::new();
    for script in document.select(&sel) {
        let text: String = script.text().collect();
        for m in url_re.find_iter(&text) {
            out.push(m.as_str().to_string());
        }
    }
    out
}
