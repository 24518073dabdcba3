//! Live-preview compositor: flatten a transparent image onto a solid color.

use image::{Rgba, RgbaImage, imageops};

use super::{ComposeError, decode_source, encode_png};

/// Flatten `source` (PNG/JPEG bytes) against a solid background color at the
/// source's own dimensions and return PNG bytes.
///
/// Fill first, then draw the source at (0,0): transparent pixels reveal the
/// fill, opaque pixels overwrite it. Same inputs always yield the same bytes.
///
/// # Errors
///
/// Returns [`ComposeError`] when the source cannot be decoded or the result
/// cannot be encoded.
pub fn flatten_preview(source: &[u8], background: Rgba<u8>) -> Result<Vec<u8>, ComposeError> {
    let src = decode_source(source)?.to_rgba8();
    let (width, height) = src.dimensions();

    let mut canvas = RgbaImage::from_pixel(width, height, background);
    imageops::overlay(&mut canvas, &src, 0, 0);

    encode_png(&canvas)
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
