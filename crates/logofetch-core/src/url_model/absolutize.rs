//! Candidate reference absolutization.

use url::Url;

/// Resolves a possibly-relative `reference` against `base`, keeping only
/// fetchable web URLs.
///
/// Returns `None` when the reference is empty, does not parse against the
/// base, or resolves to a non-http(s) scheme (`data:`, `javascript:`, ...).
pub fn absolutize_reference(base: &Url, reference: &str) -> Option<Url> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }
    let resolved = base.join(trimmed).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}
