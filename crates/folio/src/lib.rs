//! Facade over the portfolio workspace: one dependency line gives an app the
//! domain types, the kernel utilities, and whichever feature slices its Cargo
//! features select. Nothing is implemented here; the crate only composes.
//!
//! The host binary depends on `folio` with `server`, the browser bundle with
//! `client`.

pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
pub mod server {
    pub mod router {
        pub use folio_kernel::server::system_router;
    }
}

/// The feature slices, plus a compile-time record of which are present.
pub mod features {
    #[cfg(feature = "client")]
    pub use folio_contact as contact;
    #[cfg(feature = "client")]
    pub use folio_showcase as showcase;
    #[cfg(feature = "client")]
    pub use folio_theme as theme;

    /// Names of the surfaces this build was compiled with.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "client")]
        "theme",
        #[cfg(feature = "client")]
        "contact",
        #[cfg(feature = "client")]
        "showcase",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
