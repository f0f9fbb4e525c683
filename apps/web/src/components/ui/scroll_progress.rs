use dioxus::prelude::*;

use crate::hooks::use_window_scroll;

/// Thin bar under the top edge tracking how far down the page the reader is.
#[component]
pub(crate) fn ScrollProgress() -> Element {
    let scroll = use_window_scroll();
    let width = use_memo(move || format!("{:.2}%", scroll.progress() * 100.0));

    rsx! {
        div { class: "scroll-progress", aria_hidden: true,
            div { class: "scroll-progress-bar", style: "width: {width}" }
        }
    }
}
