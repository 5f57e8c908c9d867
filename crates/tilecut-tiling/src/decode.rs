//! Image decoding into an RGBA source bitmap.
//!
//! Accepts raw file bytes (PNG, JPEG, BMP, WebP, GIF) and produces the
//! [`SourceImage`] every partition run reads from. This is the only
//! place raw bytes enter the core.

use std::io::Cursor;

use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::types::{Dimensions, TilingError};

/// A decoded source image.
///
/// Owned by the session and replaced wholesale on each load; never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: RgbaImage,
    format: Option<ImageFormat>,
}

impl SourceImage {
    /// Wrap an already-decoded bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::ZeroSized`] if either side is zero.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, TilingError> {
        Self::with_format(pixels, None)
    }

    fn with_format(pixels: RgbaImage, format: Option<ImageFormat>) -> Result<Self, TilingError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(TilingError::ZeroSized {
                width: pixels.width(),
                height: pixels.height(),
            });
        }
        Ok(Self { pixels, format })
    }

    /// The RGBA pixel buffer.
    #[must_use]
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Width and height in pixels.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.pixels.width(), self.pixels.height())
    }

    /// MIME type of the container the image was decoded from, if known.
    ///
    /// Lets the browser preview reuse the original bytes instead of
    /// re-encoding the bitmap.
    #[must_use]
    pub fn mime_type(&self) -> Option<&'static str> {
        self.format.map(|f| f.to_mime_type())
    }
}

/// Decode raw image bytes into an RGBA [`SourceImage`].
///
/// The container format is sniffed from the bytes, not the filename.
/// An EXIF orientation tag is applied, so the bitmap is upright the
/// same way a browser displays the file. Every pixel layout is
/// converted to 8-bit RGBA so the partitioner only deals with one
/// buffer type; opaque formats get alpha 255.
///
/// # Errors
///
/// Returns [`TilingError::EmptyInput`] if `bytes` is empty.
/// Returns [`TilingError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
/// Returns [`TilingError::ZeroSized`] if the decoded image has no pixels.
pub fn decode_source(bytes: &[u8]) -> Result<SourceImage, TilingError> {
    if bytes.is_empty() {
        return Err(TilingError::EmptyInput);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(ImageError::IoError)?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "unreadable orientation metadata, assuming upright");
        Orientation::NoTransforms
    });

    let mut decoded = DynamicImage::from_decoder(decoder)?;
    decoded.apply_orientation(orientation);
    let source = SourceImage::with_format(decoded.to_rgba8(), format)?;

    tracing::debug!(
        width = source.pixels.width(),
        height = source.pixels.height(),
        format = ?format,
        ?orientation,
        "decoded source image"
    );
    Ok(source)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Encode an RGBA image as PNG bytes.
    pub(crate) fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        assert!(matches!(decode_source(&[]), Err(TilingError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_return_image_decode_error() {
        let result = decode_source(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(TilingError::ImageDecode(_))));
    }

    #[test]
    fn png_decodes_with_alpha_preserved() {
        let img = RgbaImage::from_fn(3, 2, |x, _| image::Rgba([10, 20, 30, (x * 100) as u8]));
        let source = decode_source(&encode_png(&img)).unwrap();

        assert_eq!(source.dimensions(), Dimensions::new(3, 2));
        assert_eq!(source.pixels(), &img);
        assert_eq!(source.mime_type(), Some("image/png"));
    }

    #[test]
    fn opaque_formats_get_full_alpha() {
        let rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 100, 50]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(rgb)
            .write_to(&mut buf, ImageFormat::Bmp)
            .unwrap();

        let source = decode_source(buf.get_ref()).unwrap();
        assert!(source.pixels().pixels().all(|p| p.0 == [200, 100, 50, 255]));
        assert_eq!(source.mime_type(), Some("image/bmp"));
    }

    /// Insert an EXIF APP1 segment carrying `orientation` right after SOI.
    fn with_exif_orientation(jpeg: &[u8], orientation: u8) -> Vec<u8> {
        let mut tiff = b"MM\x00\x2a\x00\x00\x00\x08".to_vec();
        tiff.extend_from_slice(&[0x00, 0x01]); // one IFD entry
        tiff.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        tiff.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
        tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no next IFD

        let mut payload = b"Exif\x00\x00".to_vec();
        payload.extend_from_slice(&tiff);
        let length = u16::try_from(payload.len() + 2).unwrap();

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    /// A 40x20 JPEG: red left half, blue right half.
    fn landscape_jpeg() -> Vec<u8> {
        let rgb = image::RgbImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        });
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(rgb)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn exif_rotation_is_applied() {
        let jpeg = with_exif_orientation(&landscape_jpeg(), 6);
        let source = decode_source(&jpeg).unwrap();

        // Orientation 6 is a quarter turn clockwise: the left half
        // ends up on top.
        assert_eq!(source.dimensions(), Dimensions::new(20, 40));
        let top = source.pixels().get_pixel(10, 5).0;
        let bottom = source.pixels().get_pixel(10, 35).0;
        assert!(top[0] > 200 && top[2] < 60, "top should be red: {top:?}");
        assert!(bottom[2] > 200 && bottom[0] < 60, "bottom should be blue: {bottom:?}");
        assert_eq!(source.mime_type(), Some("image/jpeg"));
    }

    #[test]
    fn jpeg_without_exif_keeps_its_shape() {
        let source = decode_source(&landscape_jpeg()).unwrap();
        assert_eq!(source.dimensions(), Dimensions::new(40, 20));
    }

    #[test]
    fn from_rgba_rejects_zero_sized_buffers() {
        let result = SourceImage::from_rgba(RgbaImage::new(0, 5));
        assert!(matches!(
            result,
            Err(TilingError::ZeroSized {
                width: 0,
                height: 5
            })
        ));
    }
}
