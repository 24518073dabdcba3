//! Final export: cover-fit crop/scale to an exact photo size.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::specs::{BackgroundColorSpec, PhotoSizeSpec};

use super::{ComposeError, decode_source, encode_png};

/// Cover-fit placement of a source image inside a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    /// Uniform scale factor, `max(tw/sw, th/sh)`.
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Centered top-left draw offsets; always ≤ 0 for a cover fit.
    pub offset_x: i64,
    pub offset_y: i64,
}

/// Compute the cover-fit scale and centered offsets.
///
/// The scaled source fully covers the target rectangle; excess on the longer
/// axis is cropped equally on opposite edges.
///
/// # Errors
///
/// Returns [`ComposeError::EmptyImage`] when the source has a zero dimension
/// (the scale factor would divide by zero).
pub fn cover_fit(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<CoverFit, ComposeError> {
    if source_width == 0 || source_height == 0 {
        return Err(ComposeError::EmptyImage { width: source_width, height: source_height });
    }

    let scale = f64::max(
        f64::from(target_width) / f64::from(source_width),
        f64::from(target_height) / f64::from(source_height),
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_width = ((f64::from(source_width) * scale).round() as u32).max(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_height = ((f64::from(source_height) * scale).round() as u32).max(1);

    let offset_x = (i64::from(target_width) - i64::from(scaled_width)) / 2;
    let offset_y = (i64::from(target_height) - i64::from(scaled_height)) / 2;

    Ok(CoverFit { scale, scaled_width, scaled_height, offset_x, offset_y })
}

/// Flatten and crop `source` to exactly `size.width × size.height` against a
/// solid background color, returning PNG bytes.
///
/// # Errors
///
/// Returns [`ComposeError`] on undecodable or zero-dimension sources, or when
/// encoding fails.
pub fn export_sized(
    source: &[u8],
    size: &PhotoSizeSpec,
    background: Rgba<u8>,
) -> Result<Vec<u8>, ComposeError> {
    let src = decode_source(source)?.to_rgba8();
    let fit = cover_fit(src.width(), src.height(), size.width, size.height)?;

    let scaled = imageops::resize(&src, fit.scaled_width, fit.scaled_height, FilterType::Lanczos3);

    let mut canvas = RgbaImage::from_pixel(size.width, size.height, background);
    imageops::overlay(&mut canvas, &scaled, fit.offset_x, fit.offset_y);

    encode_png(&canvas)
}

/// Download filename: `证件照_<size-name>_<color-id>底.png`.
#[must_use]
pub fn export_file_name(size: &PhotoSizeSpec, color: &BackgroundColorSpec) -> String {
    format!("证件照_{}_{}底.png", size.name, color.id)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
