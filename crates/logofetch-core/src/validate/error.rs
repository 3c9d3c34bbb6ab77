//! Error type for image validation.

use std::fmt;

use crate::retry::FetchError;
use crate::validate::format::ImageFormat;

/// Why a URL failed image validation.
///
/// The `Display` form doubles as the human-readable reason surfaced in
/// resolution results and logs.
#[derive(Debug)]
pub enum ValidationFailure {
    /// URL path extension is not a supported image extension.
    UnsupportedExtension,
    /// No HTTP response after retries.
    Fetch(FetchError),
    /// Response carried a failure status.
    HttpStatus(u16),
    /// Response body was empty.
    EmptyBody,
    /// Response `Content-Type` is not a supported image type.
    ContentTypeMismatch(Option<String>),
    /// Body bytes do not carry the expected format's signature.
    SignatureMismatch(ImageFormat),
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::UnsupportedExtension => {
                write!(f, "URL does not end in a supported image extension")
            }
            ValidationFailure::Fetch(e) => write!(f, "{}", e),
            ValidationFailure::HttpStatus(code) => write!(f, "HTTP {}", code),
            ValidationFailure::EmptyBody => write!(f, "empty response body"),
            ValidationFailure::ContentTypeMismatch(Some(ct)) => {
                write!(f, "unsupported content type {}", ct)
            }
            ValidationFailure::ContentTypeMismatch(None) => {
                write!(f, "response has no content type")
            }
            ValidationFailure::SignatureMismatch(format) => {
                write!(f, "body does not match the {} signature", format)
            }
        }
    }
}

impl std::error::Error for ValidationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationFailure::Fetch(e) => Some(e),
            _ => None,
        }
    }
}
