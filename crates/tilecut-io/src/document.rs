//! Document-level side effects: theme, language, and scrolling.

use tilecut_tiling::{Language, Theme};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Attribute on `<html>` that selects the stylesheet's color scheme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Errors that can occur when touching the document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// No `window`, `document`, or `<html>` element.
    #[error("no document element")]
    NoDocument,

    /// The element to act on does not exist.
    #[error("no element with id {0:?}")]
    MissingElement(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DocumentError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

fn document() -> Result<web_sys::Document, DocumentError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DocumentError::NoDocument)
}

fn document_element() -> Result<web_sys::Element, DocumentError> {
    document()?
        .document_element()
        .ok_or(DocumentError::NoDocument)
}

/// Set `data-theme` on `<html>` so the stylesheet picks the palette.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document is missing or the
/// attribute cannot be set.
pub fn apply_theme(theme: Theme) -> Result<(), DocumentError> {
    document_element()?.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

/// Set the `lang` attribute on `<html>`.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document is missing or the
/// attribute cannot be set.
pub fn apply_language(language: Language) -> Result<(), DocumentError> {
    document_element()?.set_attribute("lang", language.code())?;
    Ok(())
}

/// Smoothly scroll the element with `id` into view.
///
/// # Errors
///
/// Returns [`DocumentError::MissingElement`] if no element has that id.
pub fn scroll_into_view(id: &str) -> Result<(), DocumentError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DocumentError::MissingElement(id.to_owned()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
