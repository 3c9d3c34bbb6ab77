//! Minimal structures for the snapshot availability endpoint.

use serde::Deserialize;
use url::Url;

/// Top-level availability payload.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArchivedSnapshots {
    #[serde(default)]
    pub closest: Option<ClosestSnapshot>,
}

/// The closest archived snapshot to now, when one exists.
#[derive(Debug, Deserialize)]
pub struct ClosestSnapshot {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub timestamp: String,
}

/// Builds the availability query for `url`.
///
/// Returns `None` when the configured endpoint itself does not parse.
pub(crate) fn availability_query(endpoint: &str, url: &str) -> Option<Url> {
    let mut query = Url::parse(endpoint).ok()?;
    query.query_pairs_mut().append_pair("url", url);
    Some(query)
}
