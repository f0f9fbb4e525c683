//! # Portfolio Web Client
//!
//! Dioxus front end compiled to `wasm32` and served as a static bundle by
//! `folio-server`. Everything below `components/` is plain view code; browser
//! plumbing lives in `dom` and the stateful pieces in `hooks`.

mod app;
mod components;
mod content;
mod dom;
mod hooks;
mod pages;
mod route;

use folio_logger::Logger;

/// Launch the application in the current browser document.
pub fn run() {
    // Dioxus installs a tracing subscriber of its own when none is present,
    // so ours has to win the race; a second init just returns an error.
    let _ = Logger::builder().name(env!("CARGO_PKG_NAME")).init();
    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    dioxus::launch(app::App);
}
