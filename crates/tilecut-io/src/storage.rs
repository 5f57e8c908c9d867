//! `localStorage`-backed preference persistence.

use tilecut_tiling::{MemoryStore, PreferenceError, PreferenceStore};
use wasm_bindgen::JsValue;

/// Errors that can occur when opening browser storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The page has no `window` (e.g. running in a worker).
    #[error("no global window")]
    NoWindow,

    /// The browser exposes no `localStorage` for this origin.
    #[error("localStorage is not available")]
    Unavailable,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// [`PreferenceStore`] backed by the origin's `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoWindow`] outside a window context,
    /// [`StorageError::Unavailable`] when storage is disabled, or
    /// [`StorageError::JsError`] when the browser denies access
    /// (some privacy modes throw instead of returning `null`).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        let storage = window.local_storage()?.ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = ?e, "localStorage read failed");
                None
            }
        }
    }

    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key,
                reason: format!("{e:?}"),
            })
    }
}

/// Open the best available preference store.
///
/// Falls back to an in-memory store when `localStorage` cannot be
/// opened, so preference toggles keep working for the session.
#[must_use]
pub fn open_preference_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
