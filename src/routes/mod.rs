//! Router assembly.
//!
//! API routes plus the static frontend: the page under `static/` drives the
//! upload → remove → preview → export flow against `/api/*`.

pub mod compose;
pub mod remove_bg;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Uploads above this size are rejected by the extractor (remove.bg caps
/// source images around this size as well).
const MAX_UPLOAD_BYTES: usize = 12 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_site = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/remove-bg", post(remove_bg::remove_bg))
        .route("/api/reset", post(remove_bg::reset))
        .route("/api/session", get(remove_bg::session_status))
        .route("/api/preview", post(compose::preview))
        .route("/api/export", post(compose::export))
        .route("/api/specs", get(compose::get_specs))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .fallback_service(static_site)
        .with_state(state)
}

/// Resolve the static frontend directory.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
