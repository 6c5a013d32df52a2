//! Image decode and encode at the process boundary.

use anyhow::{Context, Result};
use pixfx_core::PixelBuffer;
use std::path::Path;

/// Load an image as 8-bit RGB.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    PixelBuffer::from_raw_rgb(width, height, decoded.as_raw())
        .with_context(|| format!("Unusable image: {}", path.display()))
}

/// Save a buffer; the format follows the file extension.
pub fn save_image(path: &Path, buffer: PixelBuffer) -> Result<()> {
    let (width, height) = buffer.dimensions();
    let encoded = image::RgbImage::from_raw(width, height, buffer.into_raw_rgb())
        .context("Pixel data does not match image dimensions")?;
    encoded
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
