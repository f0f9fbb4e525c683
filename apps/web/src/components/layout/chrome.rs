use dioxus::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::ui::{AnimatedGrid, BackToTop, ScrollProgress};
use crate::route::Route;

/// Shared page furniture wrapped around every route.
#[component]
pub(crate) fn SiteChrome() -> Element {
    rsx! {
        AnimatedGrid {}
        ScrollProgress {}
        Header {}
        main { Outlet::<Route> {} }
        Footer {}
        BackToTop {}
    }
}
