use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::components::sections::Section;
use crate::components::ui::icons;
use crate::route::Route;
use crate::{app, content, dom};

#[component]
pub(crate) fn Footer() -> Element {
    let navigator = use_navigator();
    let mut go = move |section: Section| {
        if !dom::scroll_to_section(section.id()) {
            navigator.push(Route::Home {});
        }
    };

    let profile = content::profile();
    let year = Utc::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner",
                div { class: "footer-brand",
                    div { class: "brand",
                        img { class: "brand-logo", src: app::LOGO, alt: "" }
                        span { class: "brand-name", {profile.name.clone()} }
                    }
                    p { class: "footer-blurb", {profile.summary.clone()} }
                    div { class: "footer-socials",
                        for social in content::socials() {
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
                }
                nav { class: "footer-nav", aria_label: "Footer",
                    h3 { "Quick Links" }
                    for section in Section::ALL {
                        button {
                            key: "{section.id()}",
                            class: "footer-link",
                            onclick: move |_| go(section),
                            {section.label()}
                        }
                    }
                }
                div { class: "footer-contact",
                    h3 { "Contact" }
                    a { class: "footer-link", href: "mailto:{profile.email}",
                        {profile.email.clone()}
                    }
                    span { {profile.location.clone()} }
                    span { {profile.availability.clone()} }
                }
            }
            div { class: "footer-meta",
                p { "© {year} {profile.name}. All rights reserved." }
                p { "Built with Rust & Dioxus" }
            }
        }
    }
}
