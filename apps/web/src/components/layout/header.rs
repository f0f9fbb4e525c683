use dioxus::prelude::*;

use folio::domain::profile::SocialKind;

use crate::components::sections::Section;
use crate::components::ui::{ThemeRow, ThemeToggle, icons};
use crate::hooks::{use_active_section, use_window_scroll};
use crate::route::Route;
use crate::{app, content, dom};

/// Scroll depth past which the header condenses, in pixels.
const SCROLL_THRESHOLD: f64 = 20.0;

/// Fixed top bar: brand, section navigation, socials, and the theme toggle.
/// On narrow viewports the nav moves into a slide-in drawer behind a
/// hamburger button; the page behind an open drawer cannot scroll.
#[component]
pub(crate) fn Header() -> Element {
    let scroll = use_window_scroll();
    let scrolled = use_memo(move || scroll.offset() > SCROLL_THRESHOLD);
    let active = use_active_section(scroll);

    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);
    let mut go = move |section: Section| {
        menu_open.set(false);
        // Anchors only exist on the home page; anywhere else, go back first.
        if !dom::scroll_to_section(section.id()) {
            navigator.push(Route::Home {});
        }
    };

    use_effect(move || dom::lock_body_scroll(menu_open()));
    use_drop(|| dom::lock_body_scroll(false));

    let profile = content::profile();

    rsx! {
        header {
            class: "site-header",
            class: if scrolled() { "is-scrolled" },
            div { class: "site-header-inner",
                button { class: "brand", onclick: move |_| go(Section::Home),
                    img { class: "brand-logo", src: app::LOGO, alt: "" }
                    span { class: "brand-name", {profile.name.clone()} }
                }
                nav {
                    class: "site-nav",
                    aria_label: "Primary",
                    for section in Section::ALL {
                        button {
                            key: "{section.id()}",
                            class: "nav-link",
                            class: if active() == section { "is-active" },
                            onclick: move |_| go(section),
                            {section.label()}
                        }
                    }
                }
                div { class: "header-actions",
                    div { class: "header-socials",
                        for social in content::socials().iter().filter(|social| social.kind != SocialKind::Email) {
                            a {
                                key: "{social.label}",
                                class: "icon-button",
                                href: "{social.url}",
                                target: "_blank",
                                rel: "noreferrer",
                                aria_label: "{social.label}",
                                icons::SocialIcon { kind: social.kind }
                            }
                        }
                    }
                    ThemeToggle {}
                    button {
                        class: "icon-button menu-toggle",
                        aria_label: "Open navigation",
                        aria_expanded: menu_open(),
                        onclick: move |_| menu_open.set(true),
                        icons::Menu {}
                    }
                }
            }
        }
        if menu_open() {
            div { class: "menu-overlay",
                div { class: "menu-backdrop", onclick: move |_| menu_open.set(false) }
                div {
                    class: "mobile-menu",
                    role: "dialog",
                    aria_modal: true,
                    aria_label: "Navigation",
                    div { class: "mobile-menu-head",
                        span { class: "mobile-menu-title", "Menu" }
                        button {
                            class: "icon-button",
                            aria_label: "Close menu",
                            onclick: move |_| menu_open.set(false),
                            icons::Close {}
                        }
                    }
                    nav { class: "mobile-nav", aria_label: "Primary",
                        span { class: "mobile-menu-caption", "Navigation" }
                        for section in Section::ALL {
                            button {
                                key: "{section.id()}",
                                class: "mobile-nav-link",
                                class: if active() == section { "is-active" },
                                onclick: move |_| go(section),
                                {section.label()}
                            }
                        }
                    }
                    div { class: "mobile-theme",
                        span { class: "mobile-menu-caption", "Theme" }
                        ThemeRow {}
                    }
                }
            }
        }
    }
}
