//! Static photo-size and background-color tables.
//!
//! Both tables are fixed at compile time (300 DPI print standards for the
//! sizes). Lookups are by stable id; the ids also appear in export filenames
//! and in the `GET /api/specs` payload consumed by the frontend.

use image::Rgba;
use serde::Serialize;

/// A supported ID-photo output size, in pixels at 300 DPI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhotoSizeSpec {
    pub id: &'static str,
    /// Display name, used in the export filename.
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    /// Physical print size.
    pub description: &'static str,
}

/// A supported background color for the flattened photo.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BackgroundColorSpec {
    pub id: &'static str,
    pub name: &'static str,
    /// Hex color, `#RRGGBB`.
    pub value: &'static str,
    /// CSS class hint for the frontend swatches.
    pub class: &'static str,
}

/// 一寸 25×35mm, 二寸 35×49mm.
pub const PHOTO_SIZES: [PhotoSizeSpec; 2] = [
    PhotoSizeSpec { id: "1inch", name: "一寸", width: 295, height: 413, description: "25×35mm" },
    PhotoSizeSpec { id: "2inch", name: "二寸", width: 413, height: 626, description: "35×49mm" },
];

pub const BACKGROUND_COLORS: [BackgroundColorSpec; 3] = [
    BackgroundColorSpec { id: "white", name: "白色", value: "#FFFFFF", class: "bg-white" },
    BackgroundColorSpec { id: "red", name: "红色", value: "#B22222", class: "bg-[#B22222]" },
    BackgroundColorSpec { id: "blue", name: "蓝色", value: "#4169E1", class: "bg-[#4169E1]" },
];

/// Look up a photo size by id.
#[must_use]
pub fn photo_size(id: &str) -> Option<&'static PhotoSizeSpec> {
    PHOTO_SIZES.iter().find(|s| s.id == id)
}

/// Look up a background color by id.
#[must_use]
pub fn background_color(id: &str) -> Option<&'static BackgroundColorSpec> {
    BACKGROUND_COLORS.iter().find(|c| c.id == id)
}

impl BackgroundColorSpec {
    /// The color as an opaque RGBA pixel.
    #[must_use]
    pub fn rgba(&self) -> Rgba<u8> {
        // Table values are compile-time constants; parse cannot fail.
        parse_hex_color(self.value).unwrap_or(Rgba([255, 255, 255, 255]))
    }
}

/// Parse a `#RRGGBB` hex string into an opaque RGBA pixel.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgba([r, g, b, 255]))
}

#[cfg(test)]
#[path = "specs_test.rs"]
mod tests;
