//! User preferences (language and theme) and their persistence contract.
//!
//! Preferences live behind the [`PreferenceStore`] trait so the core
//! stays free of browser APIs: the web app backs it with
//! `localStorage`, tests use [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Storage key of the language preference.
pub const LANGUAGE_KEY: &str = "lang";

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Visual color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background (the default).
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Value stored in preferences and written to `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Errors raised by a [`PreferenceStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// The backend refused the write (quota, privacy mode, ...).
    #[error("failed to persist {key:?}: {reason}")]
    Write {
        /// Key being written.
        key: &'static str,
        /// Backend-specific reason.
        reason: String,
    },
}

/// Minimal string key-value storage for preferences.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Write`] if the backend rejects the write.
    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory [`PreferenceStore`], used in tests and when the browser
/// denies access to persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The two persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Interface language.
    pub language: Language,
    /// Color scheme.
    pub theme: Theme,
}

impl Preferences {
    /// Load preferences from `store`.
    ///
    /// Missing or unrecognized values fall back to the defaults
    /// (French, light).
    #[must_use]
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let language = store
            .read(LANGUAGE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let theme = store
            .read(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { language, theme }
    }

    /// Switch the language and persist it.
    ///
    /// The in-memory value is updated even when persisting fails, so the
    /// UI always reflects the user's choice for this session.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn set_language(
        &mut self,
        store: &mut dyn PreferenceStore,
        language: Language,
    ) -> Result<(), PreferenceError> {
        self.language = language;
        store.write(LANGUAGE_KEY, language.code())
    }

    /// Switch the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn set_theme(
        &mut self,
        store: &mut dyn PreferenceStore,
        theme: Theme,
    ) -> Result<(), PreferenceError> {
        self.theme = theme;
        store.write(THEME_KEY, theme.as_str())
    }
}
