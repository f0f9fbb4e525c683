//! Convenience re-exports for downstream crates.

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};
pub use crate::css::{classes, when};
pub use folio_domain as domain;
