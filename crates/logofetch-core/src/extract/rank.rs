//! Candidate ranking by preferred format.

use url::Url;

use crate::url_model::extension_from_url;

/// Sort key for a candidate URL. Lower is better.
///
/// PNG beats JPEG beats SVG; anything else (including extension-less
/// URLs that may still validate via content type) sorts last.
pub fn rank_key(url: &Url) -> u8 {
    match extension_from_url(url.as_str()).as_deref() {
        Some("png") => 0,
        Some("jpg") | Some("jpeg") => 1,
        Some("svg") => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(url: &str) -> u8 {
        rank_key(&Url::parse(url).unwrap())
    }

    #[test]
    fn format_preference() {
        assert_eq!(key("https://example.com/a.png"), 0);
        assert_eq!(key("https://example.com/a.jpg"), 1);
        assert_eq!(key("https://example.com/a.jpeg"), 1);
        assert_eq!(key("https://example.com/a.svg"), 2);
        assert_eq!(key("https://example.com/a.webp"), 3);
        assert_eq!(key("https://example.com/image?id=9"), 3);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(key("https://example.com/A.PNG"), 0);
        assert_eq!(key("https://example.com/A.Jpeg"), 1);
    }
}
