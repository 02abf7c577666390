//! # Image Encoding
//!
//! Serializes a [`Surface`] to PNG (RGBA8, lossless) and wraps PNG bytes as a
//! `data:` URL for embedding.
//!
//! ```text
//! Surface → to_rgba8 → PngEncoder → PNG bytes → base64 → data:image/png;base64,...
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageEncoder, RgbaImage};

use super::surface::Surface;
use crate::error::BlossomError;

/// MIME prefix of the data URLs produced by [`to_data_url`].
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode a surface as PNG bytes.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, BlossomError> {
    let width = u32::try_from(surface.width())
        .map_err(|_| BlossomError::Encoding(format!("width {} too large", surface.width())))?;
    let height = u32::try_from(surface.height())
        .map_err(|_| BlossomError::Encoding(format!("height {} too large", surface.height())))?;

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            &surface.to_rgba8(),
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e: image::ImageError| BlossomError::Encoding(e.to_string()))?;

    Ok(png_bytes)
}

/// Wrap PNG bytes as a base64 data URL.
pub fn to_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut url);
    url
}

/// Decode PNG bytes back into an RGBA image.
pub fn decode_png(png: &[u8]) -> Result<RgbaImage, BlossomError> {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|e| BlossomError::Encoding(e.to_string()))
}
