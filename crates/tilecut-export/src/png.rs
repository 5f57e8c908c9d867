//! Lossless PNG encoding of tile pixels.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tilecut_tiling::RgbaImage;

use crate::ExportError;

/// Encode an RGBA buffer as PNG bytes.
///
/// Output is pixel-exact, including fully transparent padding.
///
/// # Errors
///
/// Returns [`ExportError::PngEncode`] if the encoder rejects the buffer.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut png_bytes = Vec::new();
    let encoder = PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    #[test]
    fn output_is_png() {
        let bytes = encode_png(&RgbaImage::new(2, 2)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn decodes_back_to_identical_pixels() {
        let img = RgbaImage::from_fn(7, 5, |x, y| {
            image::Rgba([x as u8 * 30, y as u8 * 40, 200, if x == 0 { 0 } else { 128 }])
        });
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }
}
