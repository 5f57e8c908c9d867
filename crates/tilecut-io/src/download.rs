//! Saving bytes to disk through a temporary `<a download>` click.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::raster::{BlobUrl, RasterError};

/// How long the object URL outlives the click.
///
/// Some browsers start reading the Blob only after the click handler
/// returns.
const REVOKE_DELAY_MS: u32 = 100;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The Blob or its URL could not be created.
    #[error(transparent)]
    Blob(#[from] RasterError),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Offer `data` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns [`DownloadError::Blob`] if the Blob URL cannot be created,
/// or [`DownloadError::JsError`] if the anchor cannot be built or
/// attached to the document.
pub fn trigger_download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;

    let url = BlobUrl::from_bytes(data, mime_type)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|e| DownloadError::JsError(format!("not an anchor: {e:?}")))?;
    anchor.set_href(url.as_str());
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Timeout::new(REVOKE_DELAY_MS, move || drop(url)).forget();

    tracing::debug!(filename, bytes = data.len(), "download triggered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_failures_keep_their_message() {
        let err = DownloadError::from(RasterError::JsError("quota".into()));
        assert!(matches!(err, DownloadError::Blob(_)));
        assert_eq!(err.to_string(), "browser API error: quota");
    }
}
