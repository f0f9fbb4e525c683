use dioxus::prelude::*;

use crate::route::Route;

/// Catch-all for client routes the app does not know.
#[component]
pub(crate) fn NotFound(segments: Vec<String>) -> Element {
    use_hook(|| tracing::warn!("Unknown route: /{}", segments.join("/")));

    rsx! {
        document::Title { "Page not found" }
        section { class: "not-found",
            p { class: "not-found-code", "404" }
            h1 { "Page not found" }
            p { "The page you are looking for does not exist or has moved." }
            Link { class: "button button-primary", to: Route::Home {}, "Back to home" }
        }
    }
}
