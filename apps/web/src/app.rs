use dioxus::prelude::*;

use crate::hooks::{provide_theme, provide_window_scroll};
use crate::route::Route;

pub(crate) const LOGO: Asset = asset!("/assets/logo.svg");
pub(crate) const PLACEHOLDER: Asset = asset!("/assets/placeholder.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root: global providers, document resources, and the router.
#[component]
pub(crate) fn App() -> Element {
    provide_theme();
    provide_window_scroll();

    rsx! {
        document::Link { rel: "icon", href: LOGO }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
