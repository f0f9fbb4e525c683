//! # Theme
//!
//! Tri-state theme preference for the site: explicit light, explicit dark, or
//! follow the operating system. The preference round-trips through browser
//! storage so it survives reloads; resolution against the OS color scheme
//! happens at render time so "system" tracks live changes.
//!
//! ## Example
//!
//! ```rust
//! use folio_theme::{ColorScheme, ThemePreference};
//!
//! let pref = ThemePreference::System;
//! assert_eq!(pref.resolve(ColorScheme::Dark), ColorScheme::Dark);
//! assert_eq!(ThemePreference::Light.resolve(ColorScheme::Dark), ColorScheme::Light);
//! ```

use folio_storage::{KeyStore, StorageError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Namespace every site key shares in browser storage.
pub const STORAGE_PREFIX: &str = "folio";
/// Key the theme preference is stored under (`folio.theme`).
pub const THEME_KEY: &str = "theme";

/// What the visitor asked for.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color scheme.
    #[default]
    System,
}

/// A concrete scheme the page can be painted with.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolves the preference against the current OS scheme.
    #[must_use]
    pub const fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system,
        }
    }

    /// Human readable label for the theme switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl ColorScheme {
    /// The class applied to the document root (`light` or `dark`).
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Reads the persisted preference, if any.
///
/// # Errors
/// Propagates [`StorageError`] when the storage area is unreachable or the
/// stored payload is damaged.
pub fn stored_preference() -> Result<Option<ThemePreference>, StorageError> {
    KeyStore::local(STORAGE_PREFIX).get(THEME_KEY)
}

/// Persists `preference` for future visits.
///
/// # Errors
/// Propagates [`StorageError`] when the write is rejected.
pub fn store_preference(preference: ThemePreference) -> Result<(), StorageError> {
    tracing::debug!(%preference, "persisting theme preference");
    KeyStore::local(STORAGE_PREFIX).set(THEME_KEY, &preference)
}

/// Drops the persisted preference, falling back to [`ThemePreference::System`].
///
/// # Errors
/// Propagates [`StorageError`] when the storage area is unreachable.
pub fn clear_preference() -> Result<(), StorageError> {
    KeyStore::local(STORAGE_PREFIX).remove(THEME_KEY)
}
