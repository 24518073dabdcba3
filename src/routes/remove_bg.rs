//! Background-removal proxy route and session reset.
//!
//! Multipart extraction stays thin; the decision logic lives in
//! `process_upload` so tests can drive it with a mock remover.

use axum::Json;
use axum::extract::{Multipart, State};
use serde_json::{Value, json};

use crate::error::{ApiError, MSG_BUSY, MSG_NO_FILE, MSG_NOT_AN_IMAGE, MSG_NOT_CONFIGURED};
use crate::removebg::{RemoveBgError, UploadedImage};
use crate::state::AppState;

/// `POST /api/remove-bg` — forward the uploaded image upstream and relay
/// either a data-URI result or a translated error.
pub async fn remove_bg(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let upload = extract_image_field(multipart).await?;
    process_upload(&state, upload).await
}

/// `POST /api/reset` — back to idle, clearing result, preview and error.
pub async fn reset(State(state): State<AppState>) -> Json<Value> {
    state.lock_session().reset();
    Json(json!({ "success": true }))
}

/// `GET /api/session` — snapshot of the state machine for the frontend.
pub async fn session_status(State(state): State<AppState>) -> Json<Value> {
    let session = state.lock_session();
    Json(json!({
        "state": session.state(),
        "error": session.error_message(),
        "has_result": session.result().is_some(),
        "has_preview": session.preview().is_some(),
        "color": session.color_id(),
        "size": session.size_id(),
    }))
}

/// Pull the `image` field out of the multipart form, if present.
async fn extract_image_field(mut multipart: Multipart) -> Result<Option<UploadedImage>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::ClientInput(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().unwrap_or("application/octet-stream").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::ClientInput(e.to_string()))?;
        return Ok(Some(UploadedImage { file_name, content_type, bytes: bytes.to_vec() }));
    }
    Ok(None)
}

/// Validate the upload, enforce single-flight, call upstream, record the
/// outcome in the session.
pub(crate) async fn process_upload(
    state: &AppState,
    upload: Option<UploadedImage>,
) -> Result<Json<Value>, ApiError> {
    let Some(upload) = upload else {
        return Err(ApiError::ClientInput(MSG_NO_FILE.into()));
    };
    if !upload.is_image() {
        return Err(ApiError::ClientInput(MSG_NOT_AN_IMAGE.into()));
    }
    let Some(remover) = state.remover.clone() else {
        return Err(ApiError::Configuration(MSG_NOT_CONFIGURED.into()));
    };

    state
        .lock_session()
        .begin_removal()
        .map_err(|_| ApiError::Busy(MSG_BUSY.into()))?;

    tracing::info!(
        file_name = %upload.file_name,
        content_type = %upload.content_type,
        bytes = upload.bytes.len(),
        "forwarding upload to remove.bg"
    );

    match remover.remove_background(&upload).await {
        Ok(output) => {
            let image = output.to_data_uri();
            state.lock_session().complete_removal(Ok(image.clone()));
            Ok(Json(json!({ "success": true, "image": image })))
        }
        Err(e) => {
            let api = relay_error(e);
            state.lock_session().complete_removal(Err(api.to_string()));
            Err(api)
        }
    }
}

/// Translate an upstream client failure into a response error. Upstream
/// statuses relay as-is; transport and build failures collapse to the generic
/// 500 so no internal detail leaks.
fn relay_error(e: RemoveBgError) -> ApiError {
    match e {
        RemoveBgError::Upstream { status, message } => ApiError::Upstream { status, message },
        RemoveBgError::ApiRequest(detail) | RemoveBgError::HttpClientBuild(detail) => {
            tracing::error!(error = %detail, "remove.bg call failed");
            ApiError::Unexpected
        }
    }
}

#[cfg(test)]
#[path = "remove_bg_test.rs"]
mod tests;
