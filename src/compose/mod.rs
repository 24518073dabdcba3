//! Compositor and exporter.
//!
//! DESIGN
//! ======
//! The transparent upstream result never changes; every background color or
//! size choice is a local re-composite. `preview` flattens at the source's own
//! dimensions for the live preview; `export` cover-fit crops to an exact
//! [`crate::specs::PhotoSizeSpec`]. Both are pure byte-in/byte-out functions,
//! which keeps them idempotent and directly testable.

pub mod export;
pub mod preview;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

pub use export::{CoverFit, cover_fit, export_file_name, export_sized};
pub use preview::flatten_preview;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Source bytes are not a decodable image.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// Source decoded to zero width or height; no valid output exists.
    #[error("image has empty dimensions ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("image encode failed: {0}")]
    Encode(String),
}

/// Decode source bytes and reject degenerate dimensions.
fn decode_source(bytes: &[u8]) -> Result<DynamicImage, ComposeError> {
    let img = image::load_from_memory(bytes).map_err(|e| ComposeError::Decode(e.to_string()))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(ComposeError::EmptyImage { width: img.width(), height: img.height() });
    }
    Ok(img)
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ComposeError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ComposeError::Encode(e.to_string()))?;
    Ok(buf)
}
