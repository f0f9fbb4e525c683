use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage area does not exist in this context (no window, or the
    /// browser disabled it).
    #[error("storage unavailable: {message}")]
    Unavailable { message: Cow<'static, str> },

    /// The value could not be encoded as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The stored payload did not match the requested type.
    #[error("failed to deserialize stored value: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The storage backend rejected the operation (quota, privacy mode).
    #[error("storage backend error: {message}")]
    Backend { message: String },
}

#[cfg(target_arch = "wasm32")]
impl StorageError {
    pub(crate) fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into() }
    }
}
