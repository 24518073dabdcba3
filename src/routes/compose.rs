//! Preview, export and specs routes.
//!
//! The browser sends the transparent removal result back as a data URI and
//! gets composited PNGs in return; nothing is ever stored server-side.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::compose::{ComposeError, export_file_name, export_sized, flatten_preview};
use crate::datauri::DataUri;
use crate::error::ApiError;
use crate::specs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Transparent source image as a data URI.
    pub image: String,
    /// Background color id (`white` / `red` / `blue`).
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub image: String,
    pub color: String,
    /// Photo size id (`1inch` / `2inch`).
    pub size: String,
}

/// `GET /api/specs` — static size/color tables plus payment display values.
pub async fn get_specs(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "sizes": specs::PHOTO_SIZES,
        "colors": specs::BACKGROUND_COLORS,
        "payment": state.config.payment,
    }))
}

/// `POST /api/preview` — flatten the transparent result against a color at
/// the source's own dimensions.
pub async fn preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<Value>, ApiError> {
    compute_preview(&state, &req)
}

/// `POST /api/export` — cover-fit crop to the chosen size, flattened, with
/// the download filename the browser should use.
pub async fn export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<Value>, ApiError> {
    compute_export(&state, &req)
}

pub(crate) fn compute_preview(state: &AppState, req: &PreviewRequest) -> Result<Json<Value>, ApiError> {
    let color = specs::background_color(&req.color)
        .ok_or_else(|| ApiError::ClientInput(format!("不支持的底色: {}", req.color)))?;

    // Record the selection and claim a preview slot; a slower, older compute
    // finishing after this one will fail its commit.
    let token = {
        let mut session = state.lock_session();
        session.select_color(color.id);
        session.begin_preview()
    };

    let source = DataUri::parse(&req.image).map_err(|e| ApiError::Decode(e.to_string()))?;
    let flattened = flatten_preview(&source.bytes, color.rgba()).map_err(compose_error)?;
    let image = DataUri::encode("image/png", &flattened);

    let fresh = state.lock_session().commit_preview(token, image.clone());
    if !fresh {
        tracing::debug!(color = color.id, "preview superseded before commit");
    }

    Ok(Json(json!({ "success": true, "image": image })))
}

pub(crate) fn compute_export(state: &AppState, req: &ExportRequest) -> Result<Json<Value>, ApiError> {
    let color = specs::background_color(&req.color)
        .ok_or_else(|| ApiError::ClientInput(format!("不支持的底色: {}", req.color)))?;
    let size = specs::photo_size(&req.size)
        .ok_or_else(|| ApiError::ClientInput(format!("不支持的尺寸: {}", req.size)))?;

    {
        let mut session = state.lock_session();
        session.select_color(color.id);
        session.select_size(size.id);
    }

    let source = DataUri::parse(&req.image).map_err(|e| ApiError::Decode(e.to_string()))?;
    let exported = export_sized(&source.bytes, size, color.rgba()).map_err(compose_error)?;

    Ok(Json(json!({
        "success": true,
        "image": DataUri::encode("image/png", &exported),
        "file_name": export_file_name(size, color),
    })))
}

/// Compositing failures: undecodable or degenerate sources are the client's
/// payload (400); an encode failure is ours (500, generic).
fn compose_error(e: ComposeError) -> ApiError {
    match e {
        ComposeError::Decode(detail) => ApiError::Decode(detail),
        ComposeError::EmptyImage { width, height } => {
            ApiError::Decode(format!("图片尺寸无效 ({width}x{height})"))
        }
        ComposeError::Encode(detail) => {
            tracing::error!(error = %detail, "png encode failed");
            ApiError::Unexpected
        }
    }
}

#[cfg(test)]
#[path = "compose_test.rs"]
mod tests;
