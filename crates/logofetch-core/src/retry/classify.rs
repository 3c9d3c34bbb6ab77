//! Classify HTTP statuses and transport errors into retry policy error kinds.

use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
///
/// 4xx statuses map to `Other`: the server answered, and asking again will
/// not change the answer.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a transport-level error for retry decisions.
pub fn classify_transport_error(e: &reqwest::Error) -> ErrorKind {
    if e.is_timeout() {
        return ErrorKind::Timeout;
    }
    // Malformed request or redirect loop; retrying repeats the same failure.
    if e.is_builder() || e.is_redirect() {
        return ErrorKind::Other;
    }
    if e.is_connect() || e.is_request() || e.is_body() {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}
