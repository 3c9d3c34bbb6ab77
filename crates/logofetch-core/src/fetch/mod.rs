//! Retrying HTTP retrieval.
//!
//! One shared `reqwest` client serves the whole pipeline: it follows
//! redirects, sends a desktop browser user agent, and enforces a
//! per-request timeout. Transient failures (timeouts, connection errors,
//! 429 and 5xx statuses) are retried with linear backoff per `RetryPolicy`.

mod response;

pub use response::FetchResponse;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{redirect, Client, Method};

use crate::retry::{
    classify_http_status, classify_transport_error, FetchError, RetryDecision, RetryPolicy,
};

/// Redirect hops before the client gives up on a URL.
const MAX_REDIRECTS: usize = 10;

/// Shared HTTP client with retry and backoff.
///
/// Responses with failure statuses are `Ok` here; `Err` means no HTTP
/// response was ever received. Callers inspect `FetchResponse::status`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    policy: RetryPolicy,
}

impl Fetcher {
    /// Builds a fetcher with the given user agent, per-request timeout, and
    /// retry policy.
    pub fn new(user_agent: &str, timeout: Duration, policy: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, policy })
    }

    /// GET `url`, buffering the whole body in memory.
    pub async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.request(Method::GET, url).await
    }

    /// HEAD `url`. The returned body is empty.
    pub async fn head(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.request(Method::HEAD, url).await
    }

    async fn request(&self, method: Method, url: &str) -> Result<FetchResponse, FetchError> {
        let mut attempt = 1u32;
        loop {
            match self.attempt_once(method.clone(), url).await {
                Ok(mut resp) => {
                    resp.attempts = attempt;
                    let kind = classify_http_status(resp.status);
                    match self.policy.decide(attempt, kind) {
                        RetryDecision::NoRetry => return Ok(resp),
                        RetryDecision::RetryAfter(delay) => {
                            tracing::debug!(
                                "{} {} returned HTTP {} on attempt {}, retrying in {:?}",
                                method,
                                url,
                                resp.status,
                                attempt,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                        }
                    }
                }
                Err(e) => {
                    let kind = classify_transport_error(&e);
                    match self.policy.decide(attempt, kind) {
                        RetryDecision::NoRetry => {
                            return Err(FetchError {
                                url: url.to_string(),
                                attempts: attempt,
                                source: e,
                            });
                        }
                        RetryDecision::RetryAfter(delay) => {
                            tracing::warn!(
                                "request to {} failed on attempt {}: {} (retrying in {:?})",
                                url,
                                attempt,
                                e,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                        }
                    }
                }
            }
        }
    }

    async fn attempt_once(
        &self,
        method: Method,
        url: &str,
    ) -> Result<FetchResponse, reqwest::Error> {
        let resp = self.client.request(method, url).send().await?;
        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = resp.bytes().await?.to_vec();
        Ok(FetchResponse {
            status,
            final_url,
            content_type,
            body,
            attempts: 0,
        })
    }
}
