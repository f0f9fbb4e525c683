use dioxus::prelude::*;

use crate::components::ui::icons;
use crate::dom;
use crate::hooks::use_window_scroll;

/// Scroll depth past which the button appears, in pixels.
const SHOW_THRESHOLD: f64 = 300.0;

/// Floating button that smooth-scrolls back to the top of the page.
#[component]
pub(crate) fn BackToTop() -> Element {
    let scroll = use_window_scroll();
    let shown = use_memo(move || scroll.offset() > SHOW_THRESHOLD);

    rsx! {
        button {
            class: "back-to-top",
            class: if shown() { "is-shown" },
            aria_label: "Back to top",
            tabindex: if !shown() { "-1" },
            onclick: move |_| dom::scroll_to_top(),
            icons::ArrowUp {}
        }
    }
}
