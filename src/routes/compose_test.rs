use super::*;
use crate::state::test_helpers::{tiny_png, unconfigured_state};

fn data_uri(bytes: &[u8]) -> String {
    DataUri::encode("image/png", bytes)
}

#[test]
fn preview_flattens_and_returns_png_data_uri() {
    let state = unconfigured_state();
    let req = PreviewRequest { image: data_uri(&tiny_png()), color: "red".into() };

    let Json(body) = compute_preview(&state, &req).unwrap();
    assert_eq!(body["success"], true);

    let image = DataUri::parse(body["image"].as_str().unwrap()).unwrap();
    assert_eq!(image.content_type, "image/png");
    let out = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
    // 1×1 transparent source over red: solid red at source dimensions.
    assert_eq!(out.dimensions(), (1, 1));
    assert_eq!(out.get_pixel(0, 0), &image::Rgba([0xB2, 0x22, 0x22, 255]));
}

#[test]
fn preview_records_color_selection_in_session() {
    let state = unconfigured_state();
    let req = PreviewRequest { image: data_uri(&tiny_png()), color: "blue".into() };
    compute_preview(&state, &req).unwrap();

    let session = state.lock_session();
    assert_eq!(session.color_id(), "blue");
    assert!(session.preview().is_some());
}

#[test]
fn preview_same_inputs_yield_identical_bytes() {
    let state = unconfigured_state();
    let req = PreviewRequest { image: data_uri(&tiny_png()), color: "white".into() };

    let Json(a) = compute_preview(&state, &req).unwrap();
    let Json(b) = compute_preview(&state, &req).unwrap();
    assert_eq!(a["image"], b["image"]);
}

#[test]
fn preview_unknown_color_is_a_client_error() {
    let state = unconfigured_state();
    let req = PreviewRequest { image: data_uri(&tiny_png()), color: "green".into() };
    let err = compute_preview(&state, &req).unwrap_err();
    assert!(matches!(err, ApiError::ClientInput(_)));
}

#[test]
fn preview_corrupt_data_uri_is_a_decode_error() {
    let state = unconfigured_state();

    let req = PreviewRequest { image: "nonsense".into(), color: "white".into() };
    assert!(matches!(compute_preview(&state, &req).unwrap_err(), ApiError::Decode(_)));

    let req = PreviewRequest { image: data_uri(b"not a png"), color: "white".into() };
    assert!(matches!(compute_preview(&state, &req).unwrap_err(), ApiError::Decode(_)));

    // The failure never disturbs the session state machine.
    assert_eq!(state.lock_session().state(), crate::session::ProcessingState::Idle);
}

#[test]
fn export_returns_target_dimensions_and_file_name() {
    let state = unconfigured_state();
    let req = ExportRequest {
        image: data_uri(&tiny_png()),
        color: "white".into(),
        size: "2inch".into(),
    };

    let Json(body) = compute_export(&state, &req).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["file_name"], "证件照_二寸_white底.png");

    let image = DataUri::parse(body["image"].as_str().unwrap()).unwrap();
    let out = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (413, 626));
}

#[test]
fn export_records_selections_in_session() {
    let state = unconfigured_state();
    let req = ExportRequest {
        image: data_uri(&tiny_png()),
        color: "red".into(),
        size: "2inch".into(),
    };
    compute_export(&state, &req).unwrap();

    let session = state.lock_session();
    assert_eq!(session.color_id(), "red");
    assert_eq!(session.size_id(), "2inch");
}

#[test]
fn export_unknown_size_is_a_client_error() {
    let state = unconfigured_state();
    let req = ExportRequest {
        image: data_uri(&tiny_png()),
        color: "white".into(),
        size: "passport".into(),
    };
    assert!(matches!(compute_export(&state, &req).unwrap_err(), ApiError::ClientInput(_)));
}
