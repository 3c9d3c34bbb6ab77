//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, throttling,
//! connection failures) and linear backoff decisions so that the fetcher
//! and the archive client share a consistent policy.

mod classify;
mod error;
mod policy;

pub use classify::{classify_http_status, classify_transport_error};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
