//! Path extension extraction.

/// Extracts the lowercased extension of the last path segment of `url`.
///
/// Query and fragment never count toward the extension because extraction
/// works on the parsed path. Returns `None` if the URL cannot be parsed,
/// the path ends in a slash, or the last segment has no `.`.
pub fn extension_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.last()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            extension_from_url("https://example.com/assets/logo.png").as_deref(),
            Some("png")
        );
        assert_eq!(
            extension_from_url("https://example.com/logo.svg").as_deref(),
            Some("svg")
        );
    }

    #[test]
    fn case_folded() {
        assert_eq!(
            extension_from_url("https://example.com/LOGO.PNG").as_deref(),
            Some("png")
        );
        assert_eq!(
            extension_from_url("https://example.com/brand.JpEg").as_deref(),
            Some("jpeg")
        );
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(
            extension_from_url("https://example.com/logo.png?v=3").as_deref(),
            Some("png")
        );
        assert_eq!(
            extension_from_url("https://example.com/logo.svg#layer1").as_deref(),
            Some("svg")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(extension_from_url("https://example.com/about"), None);
        assert_eq!(extension_from_url("https://example.com/"), None);
        assert_eq!(extension_from_url("https://example.com"), None);
    }

    #[test]
    fn trailing_slash_or_dot() {
        assert_eq!(extension_from_url("https://example.com/logo.png/"), None);
        assert_eq!(extension_from_url("https://example.com/logo."), None);
    }

    #[test]
    fn unparseable() {
        assert_eq!(extension_from_url("not a url"), None);
        assert_eq!(extension_from_url(""), None);
    }
}
