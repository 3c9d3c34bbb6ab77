//! Buffered HTTP response with the metadata the pipeline consumes.

/// Result of a fetch: final status, post-redirect URL, content type, and
/// the whole body buffered in memory.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status of the last attempt.
    pub status: u16,
    /// URL the response actually came from, after redirects.
    pub final_url: String,
    /// Raw `Content-Type` header value, if present.
    pub content_type: Option<String>,
    /// Response body. Empty for HEAD.
    pub body: Vec<u8>,
    /// Attempts made to obtain this response, including the first.
    pub attempts: u32,
}

impl FetchResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Media type from the `Content-Type` header, lowercased, with any
    /// parameters (`; charset=...`) stripped.
    pub fn media_type(&self) -> Option<String> {
        let raw = self.content_type.as_deref()?;
        let essence = raw.split(';').next().unwrap_or(raw).trim();
        if essence.is_empty() {
            return None;
        }
        Some(essence.to_ascii_lowercase())
    }

    /// Body decoded as UTF-8, lossily. Used for HTML pages.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
