use dioxus::prelude::*;

use crate::components::sections::Section;
use crate::components::ui::{icons, Avatar, AvatarSize};
use crate::{content, dom};

/// Landing section: introduction, primary calls to action, and the portrait.
#[component]
pub(crate) fn Hero() -> Element {
    let profile = content::profile();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-inner",
                div { class: "hero-copy",
                    span { class: "chip chip-accent hero-availability",
                        span { class: "status-dot", aria_hidden: true }
                        {profile.availability.clone()}
                    }
                    p { class: "hero-eyebrow", "Hi, my name is" }
                    h1 { class: "hero-name", {profile.name.clone()} }
                    p { class: "hero-headline", {profile.headline.clone()} }
                    p { class: "hero-summary", {profile.summary.clone()} }
                    div { class: "hero-actions",
                        button {
                            class: "button button-primary",
                            onclick: move |_| {
                                dom::scroll_to_section(Section::Projects.id());
                            },
                            "View My Work"
                        }
                        button {
                            class: "button button-outline",
                            onclick: move |_| {
                                dom::scroll_to_section(Section::Contact.id());
                            },
                            "Get In Touch"
                        }
                        a {
                            class: "button button-outline",
                            href: "{profile.cv_url}",
                            download: true,
                            icons::Download {}
                            "Download CV"
                        }
                    }
                    div { class: "hero-chips",
                        for tech in content::hero_stack().iter().copied() {
                            span { key: "{tech}", class: "chip", {tech} }
                        }
                    }
                    div { class: "hero-socials",
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
                div { class: "hero-portrait",
                    Avatar {
                        src: profile.avatar.clone(),
                        alt: profile.name.clone(),
                        initials: profile.initials(),
                        size: AvatarSize::Xxl,
                        status: profile.availability.clone(),
                    }
                }
            }
            div { class: "scroll-indicator", aria_hidden: true,
                icons::ArrowDown {}
            }
        }
    }
}
