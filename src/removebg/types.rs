//! Wire types and errors for the upstream removal client.

use crate::datauri::DataUri;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the upstream removal client.
#[derive(Debug, thiserror::Error)]
pub enum RemoveBgError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The upstream returned a non-success HTTP status.
    /// `message` is the upstream-provided error title when parseable,
    /// otherwise a generic status-coded message.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl RemoveBgError {
    /// Whether a retry could plausibly succeed (transport failures and
    /// transient upstream statuses only).
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::Upstream { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// UPLOAD / RESULT
// =============================================================================

/// The user's uploaded portrait, held in memory for the duration of one
/// removal request. Never persisted.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Raw transparent-background result returned by the upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalOutput {
    /// Upstream-reported content type, `image/png` when absent.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl RemovalOutput {
    /// Wrap the result bytes as a data URI for the browser.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        DataUri::encode(&self.content_type, &self.bytes)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
