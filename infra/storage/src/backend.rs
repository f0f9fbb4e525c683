//! Target-specific storage backends behind one read/write/delete seam.

use crate::Area;
use crate::error::StorageError;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{Area, StorageError};
    use wasm_bindgen::JsValue;

    fn js_error(value: JsValue) -> StorageError {
        StorageError::Backend { message: format!("{value:?}") }
    }

    fn area_storage(area: Area) -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::unavailable("no window object"))?;
        let storage = match area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        }
        .map_err(js_error)?
        .ok_or_else(|| StorageError::unavailable("storage area disabled by the browser"))?;
        Ok(storage)
    }

    pub(crate) fn read(area: Area, key: &str) -> Result<Option<String>, StorageError> {
        area_storage(area)?.get_item(key).map_err(js_error)
    }

    pub(crate) fn write(area: Area, key: &str, value: &str) -> Result<(), StorageError> {
        area_storage(area)?.set_item(key, value).map_err(js_error)
    }

    pub(crate) fn delete(area: Area, key: &str) -> Result<(), StorageError> {
        area_storage(area)?.remove_item(key).map_err(js_error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod memory {
    use super::{Area, StorageError};
    use fxhash::FxHashMap;
    use parking_lot::RwLock;
    use std::sync::LazyLock;

    static LOCAL: LazyLock<RwLock<FxHashMap<String, String>>> =
        LazyLock::new(|| RwLock::new(FxHashMap::default()));
    static SESSION: LazyLock<RwLock<FxHashMap<String, String>>> =
        LazyLock::new(|| RwLock::new(FxHashMap::default()));

    fn map(area: Area) -> &'static RwLock<FxHashMap<String, String>> {
        match area {
            Area::Local => &LOCAL,
            Area::Session => &SESSION,
        }
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn read(area: Area, key: &str) -> Result<Option<String>, StorageError> {
        Ok(map(area).read().get(key).cloned())
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn write(area: Area, key: &str, value: &str) -> Result<(), StorageError> {
        map(area).write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn delete(area: Area, key: &str) -> Result<(), StorageError> {
        map(area).write().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use web::{delete, read, write};

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use memory::{delete, read, write};
