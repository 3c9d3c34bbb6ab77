//! Terminal fetch error type.

use thiserror::Error;

/// Error returned when a request exhausts its retry budget without ever
/// receiving an HTTP response. Responses with failure statuses are not
/// errors at this layer; callers inspect the status themselves.
#[derive(Debug, Error)]
#[error("request to {url} failed after {attempts} attempt(s): {source}")]
pub struct FetchError {
    /// URL the request was sent to.
    pub url: String,
    /// Attempts made, including the first.
    pub attempts: u32,
    #[source]
    pub source: reqwest::Error,
}
