//! Request error taxonomy.
//!
//! Every failure leaving a handler becomes structured JSON (`{"error": ...}`)
//! with a status code per the error class. Unexpected failures collapse to a
//! generic 500 so internals never reach the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// User-facing message for missing/placeholder upstream credential.
pub const MSG_NOT_CONFIGURED: &str = "请先在 .env 中配置 REMOVE_BG_API_KEY（在 remove.bg 注册获取）";
/// User-facing message for a missing upload.
pub const MSG_NO_FILE: &str = "请上传图片文件";
/// User-facing message for a non-image upload.
pub const MSG_NOT_AN_IMAGE: &str = "请选择图片文件（JPG、PNG 等）";
/// User-facing message while another removal is still in flight.
pub const MSG_BUSY: &str = "正在处理中，请稍候";
/// Generic fallback for unexpected failures.
pub const MSG_UNEXPECTED: &str = "处理失败，请稍后重试";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or placeholder upstream credential. Not retryable.
    #[error("{0}")]
    Configuration(String),

    /// Bad client input (no file, non-image MIME, unknown size/color id).
    /// Surfaced immediately, no upstream call is made.
    #[error("{0}")]
    ClientInput(String),

    /// Upstream removal service failed; message and status relayed as-is.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Another removal operation is already in flight (single-flight guard).
    #[error("{0}")]
    Busy(String),

    /// Client-supplied image data could not be decoded.
    #[error("图片解码失败：{0}")]
    Decode(String),

    /// Anything else. The caller only ever sees the generic message.
    #[error("{MSG_UNEXPECTED}")]
    Unexpected,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Configuration(_) | Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ClientInput(_) | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Busy(_) => StatusCode::CONFLICT,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
