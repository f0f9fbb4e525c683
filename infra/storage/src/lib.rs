//! # Storage
//!
//! Typed key-value persistence for the site.
//!
//! On `wasm32` targets values live in the browser's `localStorage` or
//! `sessionStorage`; everywhere else they live in a process-local map so that
//! feature crates and their tests exercise the same API without a browser.
//!
//! Values are serialized as JSON. Keys are namespaced with a store prefix so
//! unrelated widgets cannot trample each other's entries.
//!
//! ## Example
//!
//! ```rust
//! use folio_storage::KeyStore;
//!
//! let store = KeyStore::local("folio");
//! store.set("theme", &"dark").unwrap();
//! let theme: Option<String> = store.get("theme").unwrap();
//! assert_eq!(theme.as_deref(), Some("dark"));
//! # store.remove("theme").unwrap();
//! ```

mod backend;
mod error;

pub use crate::error::StorageError;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which browser storage area a [`KeyStore`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Survives the session (`localStorage`).
    Local,
    /// Cleared when the tab closes (`sessionStorage`).
    Session,
}

/// A prefixed, typed view over one storage area.
///
/// Cloning is cheap; stores carry no handles, only the area and prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    area: Area,
    prefix: String,
}

impl KeyStore {
    /// Store backed by `localStorage`, namespaced under `prefix`.
    #[must_use]
    pub fn local(prefix: impl Into<String>) -> Self {
        Self { area: Area::Local, prefix: prefix.into() }
    }

    /// Store backed by `sessionStorage`, namespaced under `prefix`.
    #[must_use]
    pub fn session(prefix: impl Into<String>) -> Self {
        Self { area: Area::Session, prefix: prefix.into() }
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] when the storage area cannot be
    /// reached and [`StorageError::Deserialize`] when the stored payload does
    /// not match `T`.
    pub fn get<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = backend::read(self.area, &self.scoped(key))? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(StorageError::Deserialize)?;
        Ok(Some(value))
    }

    /// Serializes and writes `value` under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::Serialize`] when the value cannot be encoded
    /// and [`StorageError::Unavailable`] or [`StorageError::Backend`] when the
    /// storage area rejects the write (quota, privacy mode).
    pub fn set<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        backend::write(self.area, &self.scoped(key), &raw)
    }

    /// Removes the value under `key`, if any.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] when the storage area cannot be
    /// reached.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        backend::delete(self.area, &self.scoped(key))
    }

    /// The storage area this store writes to.
    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    fn scoped(&self, key: &str) -> String {
        if self.prefix.is_empty() { key.to_owned() } else { format!("{}.{key}", self.prefix) }
    }
}
