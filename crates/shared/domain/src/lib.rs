//! # Domain Models
//!
//! Plain data types shared by every other crate: the site owner profile, the
//! project records, the host configuration, and the structured data
//! descriptors. Only `serde` and `strum` belong here; anything that does I/O
//! or carries real logic lives in a feature crate.

pub mod config;
pub mod profile;
pub mod project;
pub mod schema;
