//! Data-URI codec: `data:<mime>;base64,<payload>`.
//!
//! The removal result travels between server and browser as a data URI so the
//! page can use it directly as an image source without any server-side storage.

use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    #[error("not a base64 data URI")]
    BadFormat,
    #[error("base64 decode failed: {0}")]
    BadPayload(String),
}

/// Decoded data URI: media type plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// Encode bytes as a `data:` URI string.
    #[must_use]
    pub fn encode(content_type: &str, bytes: &[u8]) -> String {
        format!("data:{content_type};base64,{}", general_purpose::STANDARD.encode(bytes))
    }

    /// Parse a `data:<mime>;base64,<payload>` string.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError`] when the prefix or base64 payload is malformed.
    pub fn parse(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri.strip_prefix("data:").ok_or(DataUriError::BadFormat)?;
        let (content_type, payload) = rest.split_once(";base64,").ok_or(DataUriError::BadFormat)?;
        let bytes = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| DataUriError::BadPayload(e.to_string()))?;
        Ok(Self { content_type: content_type.to_owned(), bytes })
    }
}

#[cfg(test)]
#[path = "datauri_test.rs"]
mod tests;
