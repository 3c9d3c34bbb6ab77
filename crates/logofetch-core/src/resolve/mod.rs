//! Resolution orchestrator.
//!
//! Sequences the whole decision procedure: classify the seed, try the
//! live web (direct validation or page extraction), then fall back to an
//! archived snapshot. The archive branch runs at most once per call, and
//! an archived page gets exactly one round of re-extraction. Every
//! failure becomes data in the terminal [`ResolutionResult`]; nothing in
//! here returns an error to the caller.

mod result;
mod seed;

pub use result::ResolutionResult;
pub use seed::{classify_seed, Classification};

use std::time::Duration;

use anyhow::Result;
use url::Url;

use crate::archive::{find_snapshot, ArchiveOutcome};
use crate::config::LogofetchConfig;
use crate::extract::extract_candidates;
use crate::fetch::Fetcher;
use crate::validate::{validate_candidate_url, validate_image_url};

/// Per-call resolution knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Overall deadline for the whole call, retries and fallbacks
    /// included. `None` leaves the call bounded only by per-request
    /// timeouts.
    pub overall_timeout: Option<Duration>,
}

/// The resolution pipeline. One instance can serve concurrent calls;
/// all per-call state lives on the stack of that call.
#[derive(Debug)]
pub struct Resolver {
    fetcher: Fetcher,
    archive_endpoint: String,
    /// Optional cap on candidates validated per page. `None` walks the
    /// whole ranked list.
    max_candidates: Option<usize>,
}

impl Resolver {
    /// Builds a resolver from configuration.
    pub fn from_config(config: &LogofetchConfig) -> Result<Self> {
        let fetcher = Fetcher::new(
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
            config.retry_policy(),
        )?;
        Ok(Self {
            fetcher,
            archive_endpoint: config.archive_endpoint.clone(),
            max_candidates: config.max_candidates,
        })
    }

    /// Builds a resolver around an existing fetcher.
    pub fn new(fetcher: Fetcher, archive_endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            archive_endpoint: archive_endpoint.into(),
            max_candidates: None,
        }
    }

    /// The underlying HTTP client, for callers that also probe URLs
    /// directly.
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Resolves `seed` to a single validated image URL.
    pub async fn resolve_image(&self, seed: &str) -> ResolutionResult {
        let seed = seed.trim();
        if seed.is_empty() {
            return ResolutionResult::failure("Empty URL", None);
        }
        match classify_seed(seed) {
            Classification::DirectImage => self.resolve_direct(seed).await,
            Classification::Page => self.resolve_page(seed).await,
        }
    }

    /// Like [`Resolver::resolve_image`] with an optional overall deadline.
    ///
    /// Hitting the deadline yields a failed result, not an error: the
    /// terminal `ResolutionResult` stays the only failure signal.
    pub async fn resolve_image_with(
        &self,
        seed: &str,
        options: &ResolveOptions,
    ) -> ResolutionResult {
        let Some(limit) = options.overall_timeout else {
            return self.resolve_image(seed).await;
        };
        match tokio::time::timeout(limit, self.resolve_image(seed)).await {
            Ok(result) => result,
            Err(_) => {
                let trimmed = seed.trim();
                let source = (!trimmed.is_empty()).then(|| trimmed.to_string());
                ResolutionResult::failure(
                    format!("resolution timed out after {:?}", limit),
                    source,
                )
            }
        }
    }

    async fn resolve_direct(&self, seed: &str) -> ResolutionResult {
        match validate_image_url(&self.fetcher, seed).await {
            Ok(format) => {
                tracing::info!("direct image {} validated as {}", seed, format);
                ResolutionResult::success(seed, seed)
            }
            Err(reason) => {
                tracing::debug!("direct image {} failed validation: {}", seed, reason);
                match find_snapshot(&self.fetcher, &self.archive_endpoint, seed).await {
                    ArchiveOutcome::Image { url, format } => {
                        tracing::info!("archived copy {} validated as {}", url, format);
                        ResolutionResult::success(url, seed)
                    }
                    ArchiveOutcome::Page { url } => {
                        // The snapshot service answered with a non-image
                        // address; surface it as-is.
                        tracing::debug!("snapshot for {} is not an image URL, returning {}", seed, url);
                        ResolutionResult::success(url, seed)
                    }
                    ArchiveOutcome::InvalidImage { url, reason } => {
                        tracing::debug!("archived copy {} rejected: {}", url, reason);
                        ResolutionResult::failure(
                            "Direct URL invalid and no archived copy found",
                            Some(seed.to_string()),
                        )
                    }
                    ArchiveOutcome::None => ResolutionResult::failure(
                        "Direct URL invalid and no archived copy found",
                        Some(seed.to_string()),
                    ),
                }
            }
        }
    }

    async fn resolve_page(&self, seed: &str) -> ResolutionResult {
        if let Some(result) = self.try_page_candidates(seed).await {
            return result;
        }

        match find_snapshot(&self.fetcher, &self.archive_endpoint, seed).await {
            ArchiveOutcome::Image { url, format } => {
                tracing::info!("archived copy {} validated as {}", url, format);
                ResolutionResult::success(url, seed)
            }
            ArchiveOutcome::Page { url } => {
                tracing::debug!("re-extracting candidates from archived page {}", url);
                if let Some(result) = self.try_page_candidates(&url).await {
                    return result;
                }
                ResolutionResult::failure(
                    "Could not resolve an image from page or archive",
                    Some(seed.to_string()),
                )
            }
            ArchiveOutcome::InvalidImage { url, reason } => {
                tracing::debug!("archived copy {} rejected: {}", url, reason);
                ResolutionResult::failure(
                    "Could not resolve an image from page or archive",
                    Some(seed.to_string()),
                )
            }
            ArchiveOutcome::None => ResolutionResult::failure(
                "Could not resolve an image from page or archive",
                Some(seed.to_string()),
            ),
        }
    }

    /// Fetches `page_url`, extracts candidates, and validates them in rank
    /// order. The walk covers every candidate unless a cap was configured.
    /// Returns `None` when the page is unusable or nothing validates, so
    /// the caller can move on to the archive branch.
    async fn try_page_candidates(&self, page_url: &str) -> Option<ResolutionResult> {
        let resp = match self.fetcher.get(page_url).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!("page fetch failed for {}: {}", page_url, e);
                return None;
            }
        };
        if !resp.is_success() {
            tracing::debug!("page fetch for {} returned HTTP {}", page_url, resp.status);
            return None;
        }

        let base = Url::parse(&resp.final_url).ok()?;
        let html = resp.text();
        let candidates = extract_candidates(&html, &base);
        if candidates.is_empty() {
            tracing::debug!("no candidates extracted from {}", page_url);
            return None;
        }

        let cap = self.max_candidates.unwrap_or(usize::MAX);
        let considered = candidates.len().min(cap);
        for candidate in candidates.into_iter().take(cap) {
            match validate_candidate_url(&self.fetcher, candidate.url.as_str()).await {
                Ok(format) => {
                    tracing::info!(
                        "candidate {} ({}) validated as {}",
                        candidate.url,
                        candidate.strategy,
                        format
                    );
                    return Some(ResolutionResult::success(candidate.url.as_str(), page_url));
                }
                Err(reason) => {
                    tracing::debug!("candidate {} rejected: {}", candidate.url, reason);
                }
            }
        }
        tracing::debug!(
            "none of {} candidate(s) from {} validated",
            considered,
            page_url
        );
        None
    }
}
