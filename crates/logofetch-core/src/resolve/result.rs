//! Terminal resolution result.

use serde::{Deserialize, Serialize};

/// Terminal outcome of one resolution call.
///
/// `final_url` is present iff `success`; `reason` iff not. `source_url`
/// names the seed or page that produced the result whenever one is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResolutionResult {
    /// Successful resolution of `source_url` to `final_url`.
    pub fn success(final_url: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            success: true,
            final_url: Some(final_url.into()),
            source_url: Some(source_url.into()),
            reason: None,
        }
    }

    /// Failed resolution with a human-readable reason.
    pub fn failure(reason: impl Into<String>, source_url: Option<String>) -> Self {
        Self {
            success: false,
            final_url: None,
            source_url,
            reason: Some(reason.into()),
        }
    }
}
