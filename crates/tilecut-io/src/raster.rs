//! Blob URLs for showing and downloading bytes without a server.
//!
//! The source preview points straight at the uploaded bytes, tile
//! thumbnails are PNG-encoded first, and downloads wrap whatever they
//! save. Each URL is a [`BlobUrl`] that revokes itself on drop, so
//! replacing or clearing the tile set releases every thumbnail it
//! created.

use tilecut_export::{ExportError, TILE_MIME_TYPE, encode_png};
use tilecut_tiling::RgbaImage;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur during raster-to-Blob-URL conversion.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// PNG encoding failed.
    #[error(transparent)]
    Encode(#[from] ExportError),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for RasterError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An object URL that is revoked when dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct BlobUrl(String);

impl BlobUrl {
    /// Wrap `bytes` in a `Blob` of type `mime_type` and create a URL for it.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::JsError`] if Blob or URL creation fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, RasterError> {
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self(url))
    }

    /// Encode `image` as PNG and create a URL for it.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if PNG encoding fails.
    /// Returns [`RasterError::JsError`] if Blob or URL creation fails.
    pub fn from_rgba(image: &RgbaImage) -> Result<Self, RasterError> {
        let png = encode_png(image)?;
        Self::from_bytes(&png, TILE_MIME_TYPE)
    }

    /// The `blob:` URL, for use as an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for BlobUrl {
    fn drop(&mut self) {
        // Failures are ignored: the URL may already be gone.
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}
