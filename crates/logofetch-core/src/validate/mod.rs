//! Image validation by magic numbers.
//!
//! A URL only counts as a usable image if a fetch of it succeeds and the
//! body bytes carry the signature of a supported format. Extensions and
//! content types choose which signature to check; they are never trusted
//! on their own.

mod error;
mod format;

pub use error::ValidationFailure;
pub use format::{ImageFormat, PNG_SIGNATURE};

use crate::fetch::{FetchResponse, Fetcher};
use crate::url_model::extension_from_url;

/// Validates a URL that is expected to be a direct image by its extension.
///
/// Fails without touching the network when the path extension is not a
/// supported image extension. Otherwise fetches the body and checks it
/// against the signature the extension implies.
pub async fn validate_image_url(
    fetcher: &Fetcher,
    url: &str,
) -> Result<ImageFormat, ValidationFailure> {
    let format = expected_format_from_url(url).ok_or(ValidationFailure::UnsupportedExtension)?;
    let resp = fetch_body(fetcher, url).await?;
    check_signature(format, &resp.body)
}

/// Validates a candidate URL extracted from a page.
///
/// With a supported extension this behaves like [`validate_image_url`].
/// Without one (query-string image endpoints, CDN paths) the body is
/// fetched anyway and the server's `Content-Type` picks the signature to
/// check, so extension-less images can still win.
pub async fn validate_candidate_url(
    fetcher: &Fetcher,
    url: &str,
) -> Result<ImageFormat, ValidationFailure> {
    if let Some(format) = expected_format_from_url(url) {
        let resp = fetch_body(fetcher, url).await?;
        return check_signature(format, &resp.body);
    }

    let resp = fetch_body(fetcher, url).await?;
    match resp.media_type() {
        Some(media) => validate_bytes_for_content_type(&resp.body, &media),
        None => Err(ValidationFailure::ContentTypeMismatch(None)),
    }
}

/// Validates an already-fetched body against the format its declared
/// content type claims.
pub fn validate_bytes_for_content_type(
    body: &[u8],
    media_type: &str,
) -> Result<ImageFormat, ValidationFailure> {
    let format = ImageFormat::from_content_type(media_type).ok_or_else(|| {
        ValidationFailure::ContentTypeMismatch(Some(media_type.to_string()))
    })?;
    check_signature(format, body)
}

/// Boolean form of [`validate_image_url`] for callers that only need a
/// pass/fail answer.
pub async fn is_valid_image_url(fetcher: &Fetcher, url: &str) -> bool {
    validate_image_url(fetcher, url).await.is_ok()
}

/// Format implied by the URL's path extension, if it is a supported one.
pub fn expected_format_from_url(url: &str) -> Option<ImageFormat> {
    extension_from_url(url).and_then(|ext| ImageFormat::from_extension(&ext))
}

async fn fetch_body(fetcher: &Fetcher, url: &str) -> Result<FetchResponse, ValidationFailure> {
    let resp = fetcher.get(url).await.map_err(ValidationFailure::Fetch)?;
    if !resp.is_success() {
        return Err(ValidationFailure::HttpStatus(resp.status));
    }
    if resp.body.is_empty() {
        return Err(ValidationFailure::EmptyBody);
    }
    Ok(resp)
}

fn check_signature(format: ImageFormat, body: &[u8]) -> Result<ImageFormat, ValidationFailure> {
    if format.matches_signature(body) {
        Ok(format)
    } else {
        Err(ValidationFailure::SignatureMismatch(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_format_follows_extension() {
        assert_eq!(
            expected_format_from_url("https://example.com/logo.png"),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            expected_format_from_url("https://example.com/logo.JPEG?v=2"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(expected_format_from_url("https://example.com/logo.webp"), None);
        assert_eq!(expected_format_from_url("https://example.com/about"), None);
    }

    #[test]
    fn signature_check_maps_to_failure() {
        assert!(check_signature(ImageFormat::Png, &PNG_SIGNATURE).is_ok());
        assert!(matches!(
            check_signature(ImageFormat::Png, b"GIF89a"),
            Err(ValidationFailure::SignatureMismatch(ImageFormat::Png))
        ));
    }

    #[test]
    fn bytes_validated_by_declared_content_type() {
        assert_eq!(
            validate_bytes_for_content_type(&PNG_SIGNATURE, "image/png").unwrap(),
            ImageFormat::Png
        );
        assert!(matches!(
            validate_bytes_for_content_type(&PNG_SIGNATURE, "text/html"),
            Err(ValidationFailure::ContentTypeMismatch(Some(_)))
        ));
        assert!(matches!(
            validate_bytes_for_content_type(b"GIF89a", "image/png"),
            Err(ValidationFailure::SignatureMismatch(ImageFormat::Png))
        ));
    }
}
