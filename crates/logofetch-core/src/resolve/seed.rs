//! Seed classification.

use crate::validate::expected_format_from_url;

/// How a seed reference is treated by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The seed's path ends in a supported image extension; it is taken to
    /// be the image itself.
    DirectImage,
    /// Anything else: a page to fetch and mine for candidates.
    Page,
}

/// Classifies a seed by its path extension.
///
/// Unparseable seeds classify as `Page`; the orchestrator's fetch will
/// fail on them and route through the archive fallback.
pub fn classify_seed(seed: &str) -> Classification {
    if expected_format_from_url(seed).is_some() {
        Classification::DirectImage
    } else {
        Classification::Page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_are_direct() {
        assert_eq!(
            classify_seed("https://example.com/logo.png"),
            Classification::DirectImage
        );
        assert_eq!(
            classify_seed("https://example.com/brand/logo.SVG"),
            Classification::DirectImage
        );
        assert_eq!(
            classify_seed("https://example.com/a.jpeg?v=1"),
            Classification::DirectImage
        );
    }

    #[test]
    fn everything_else_is_a_page() {
        assert_eq!(classify_seed("https://example.com"), Classification::Page);
        assert_eq!(
            classify_seed("https://example.com/about.html"),
            Classification::Page
        );
        assert_eq!(
            classify_seed("https://example.com/logo.webp"),
            Classification::Page
        );
        assert_eq!(classify_seed("not a url"), Classification::Page);
    }
}
