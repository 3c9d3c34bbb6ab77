//! Web-archive snapshot fallback.
//!
//! When the live web fails, the availability endpoint is asked for the
//! closest archived snapshot of the URL. A snapshot that is itself an
//! image URL is validated on the spot; a snapshot of a page is handed
//! back for one round of re-extraction. Lookup problems (endpoint down,
//! malformed payload) are absorbed: the pipeline treats them as "no
//! snapshot" and proceeds to its terminal failure.

mod api;

pub use api::{AvailabilityResponse, ArchivedSnapshots, ClosestSnapshot};

use crate::fetch::Fetcher;
use crate::validate::{
    expected_format_from_url, validate_image_url, ImageFormat, ValidationFailure,
};

/// What an archive lookup produced.
#[derive(Debug)]
pub enum ArchiveOutcome {
    /// No snapshot exists for the URL.
    None,
    /// The snapshot is itself a validated image.
    Image { url: String, format: ImageFormat },
    /// The snapshot is an archived page to re-process.
    Page { url: String },
    /// The snapshot looked like an image but failed validation.
    InvalidImage { url: String, reason: ValidationFailure },
}

/// Looks up the closest archived snapshot of `url` via `endpoint`.
pub async fn find_snapshot(fetcher: &Fetcher, endpoint: &str, url: &str) -> ArchiveOutcome {
    let Some(query) = api::availability_query(endpoint, url) else {
        tracing::warn!("archive endpoint does not parse: {}", endpoint);
        return ArchiveOutcome::None;
    };

    let resp = match fetcher.get(query.as_str()).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("archive availability lookup failed: {}", e);
            return ArchiveOutcome::None;
        }
    };
    if !resp.is_success() {
        tracing::warn!(
            "archive availability lookup for {} returned HTTP {}",
            url,
            resp.status
        );
        return ArchiveOutcome::None;
    }

    let parsed: AvailabilityResponse = match serde_json::from_slice(&resp.body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("archive availability payload did not parse: {}", e);
            return ArchiveOutcome::None;
        }
    };

    let Some(closest) = parsed.archived_snapshots.closest else {
        tracing::debug!("no archived snapshot for {}", url);
        return ArchiveOutcome::None;
    };
    if closest.url.is_empty() {
        return ArchiveOutcome::None;
    }
    tracing::debug!(
        "closest snapshot for {} is {} (timestamp {})",
        url,
        closest.url,
        closest.timestamp
    );

    if expected_format_from_url(&closest.url).is_some() {
        match validate_image_url(fetcher, &closest.url).await {
            Ok(format) => ArchiveOutcome::Image {
                url: closest.url,
                format,
            },
            Err(reason) => ArchiveOutcome::InvalidImage {
                url: closest.url,
                reason,
            },
        }
    } else {
        ArchiveOutcome::Page { url: closest.url }
    }
}
