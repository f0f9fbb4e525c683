//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for class-name
//! composition, config loading, and the system health surface.
//!
//! ## Class-name composition
//! ```rust
//! use folio_kernel::css::{classes, when};
//!
//! let class = classes(["nav-link", when(true, "is-active")]);
//! assert_eq!(class, "nav-link is-active");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//!
//! #[derive(serde::Deserialize, Default)]
//! struct HostConfig { port: u16 }
//!
//! let cfg: HostConfig = load_config(None)?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod css;
pub mod prelude;
#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
pub mod server;

pub use folio_domain as domain;
