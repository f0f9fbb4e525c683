use dioxus::prelude::*;

use folio::features::theme::ThemePreference;
use strum::IntoEnumIterator;

use crate::components::ui::icons;
use crate::hooks::use_theme;

/// Cycles Light, Dark, System. The icon shows the current preference, not
/// the resolved scheme, so System stays distinguishable from its result.
#[component]
pub(crate) fn ThemeToggle() -> Element {
    let theme = use_theme();
    let preference = theme.preference();

    rsx! {
        button {
            class: "icon-button theme-toggle",
            aria_label: "Switch theme (current: {preference})",
            title: "Theme: {preference}",
            onclick: move |_| theme.cycle(),
            match preference {
                ThemePreference::Light => rsx! {
                    icons::Sun {}
                },
                ThemePreference::Dark => rsx! {
                    icons::Moon {}
                },
                ThemePreference::System => rsx! {
                    icons::Monitor {}
                },
            }
        }
    }
}

/// One button per preference, for the mobile drawer where a cycling icon
/// would be too cryptic.
#[component]
pub(crate) fn ThemeRow() -> Element {
    let theme = use_theme();

    rsx! {
        div { class: "theme-row",
            for preference in ThemePreference::iter() {
                button {
                    key: "{preference}",
                    class: "theme-option",
                    class: if theme.preference() == preference { "is-selected" },
                    onclick: move |_| theme.set(preference),
                    match preference {
                        ThemePreference::Light => rsx! {
                            icons::Sun {}
                        },
                        ThemePreference::Dark => rsx! {
                            icons::Moon {}
                        },
                        ThemePreference::System => rsx! {
                            icons::Monitor {}
                        },
                    }
                    span { {preference.label()} }
                }
            }
        }
    }
}
