//! Static localization table.
//!
//! Every user-visible string is looked up by `(Language, MessageKey)`.
//! There is no runtime loading and no fallback chain: both languages
//! define every key, which the tests enforce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French (the default).
    #[default]
    Fr,
    /// English.
    En,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 2] = [Self::Fr, Self::En];

    /// ISO 639-1 code, as stored in preferences and set on `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }

    /// Label for the language toggle button: the code of the language
    /// the button switches *to*, upper-cased.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Fr => "EN",
            Self::En => "FR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            other => Err(UnknownLanguage(other.to_owned())),
        }
    }
}

/// Key of a localized UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Page title.
    Title,
    /// File picker button.
    Upload,
    /// Tile width input label.
    Width,
    /// Tile height input label.
    Height,
    /// Keep-empty checkbox label.
    KeepEmpty,
    /// Overlap checkbox label.
    Overlap,
    /// Cut button.
    Cut,
    /// Results section heading.
    Results,
    /// Download-all button.
    DownloadAll,
    /// Reset button.
    NewImage,
    /// Plural noun for the count summary.
    Images,
    /// Singular noun for the count summary.
    Image,
    /// Accessible label of the per-tile download button.
    DownloadTile,
    /// Accessible label of the theme toggle.
    ToggleTheme,
    /// Accessible label of the language toggle.
    ToggleLanguage,
    /// Shown when the selected file cannot be decoded.
    LoadFailed,
    /// Shown while the archive is being built.
    Preparing,
}

impl MessageKey {
    /// Every key, for exhaustiveness checks.
    pub const ALL: [Self; 17] = [
        Self::Title,
        Self::Upload,
        Self::Width,
        Self::Height,
        Self::KeepEmpty,
        Self::Overlap,
        Self::Cut,
        Self::Results,
        Self::DownloadAll,
        Self::NewImage,
        Self::Images,
        Self::Image,
        Self::DownloadTile,
        Self::ToggleTheme,
        Self::ToggleLanguage,
        Self::LoadFailed,
        Self::Preparing,
    ];
}

/// Look up the display string for `key` in `lang`.
#[must_use]
pub const fn translate(lang: Language, key: MessageKey) -> &'static str {
    match lang {
        Language::Fr => french(key),
        Language::En => english(key),
    }
}

const fn french(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Image Cutter",
        MessageKey::Upload => "Choisir une image",
        MessageKey::Width => "Largeur (px)",
        MessageKey::Height => "Hauteur (px)",
        MessageKey::KeepEmpty => "Garder les images vides",
        MessageKey::Overlap => "Mode chevauchement (50%)",
        MessageKey::Cut => "Découper",
        MessageKey::Results => "Résultats",
        MessageKey::DownloadAll => "Télécharger tout (ZIP)",
        MessageKey::NewImage => "Nouvelle image",
        MessageKey::Images => "images",
        MessageKey::Image => "image",
        MessageKey::DownloadTile => "Télécharger cette image",
        MessageKey::ToggleTheme => "Changer de thème",
        MessageKey::ToggleLanguage => "Changer de langue",
        MessageKey::LoadFailed => "Impossible de lire cette image",
        MessageKey::Preparing => "Préparation…",
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Image Cutter",
        MessageKey::Upload => "Choose an image",
        MessageKey::Width => "Width (px)",
        MessageKey::Height => "Height (px)",
        MessageKey::KeepEmpty => "Keep empty images",
        MessageKey::Overlap => "Overlap mode (50%)",
        MessageKey::Cut => "Cut",
        MessageKey::Results => "Results",
        MessageKey::DownloadAll => "Download all (ZIP)",
        MessageKey::NewImage => "New image",
        MessageKey::Images => "images",
        MessageKey::Image => "image",
        MessageKey::DownloadTile => "Download this image",
        MessageKey::ToggleTheme => "Toggle theme",
        MessageKey::ToggleLanguage => "Switch language",
        MessageKey::LoadFailed => "Could not read this image",
        MessageKey::Preparing => "Preparing…",
    }
}

/// Localized count summary, e.g. `"1 image"` or `"12 images"`.
///
/// Exactly one uses the singular noun; zero and everything above one
/// use the plural.
#[must_use]
pub fn count_label(lang: Language, count: usize) -> String {
    let noun = if count == 1 {
        MessageKey::Image
    } else {
        MessageKey::Images
    };
    format!("{count} {}", translate(lang, noun))
}
