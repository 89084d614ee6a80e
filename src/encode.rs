use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::canvas::Canvas;
use crate::error::Result;

/// Encodes the canvas as an 8-bit RGB PNG with no alpha channel.
pub fn png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    let encoder = PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        &canvas.to_rgb_bytes(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(png_bytes)
}

/// Standard (padded) base64, the transport form for PNG bytes.
pub fn base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
