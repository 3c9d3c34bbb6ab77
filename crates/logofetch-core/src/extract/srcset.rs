//! Minimal `srcset` handling.

/// Returns the URL of the first `srcset` entry.
///
/// Entries are comma-separated; each entry is a URL optionally followed by
/// a width or density descriptor. Descriptors are dropped.
pub fn first_srcset_url(srcset: &str) -> Option<String> {
    let first_entry = srcset.split(',').next()?;
    let url = first_entry.split_whitespace().next()?;
    Some(url.to_string())
}
