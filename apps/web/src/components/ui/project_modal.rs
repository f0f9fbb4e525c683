use dioxus::prelude::*;

use folio::domain::project::Project;

use crate::components::ui::{icons, SmartImage};
use crate::dom;

/// Full project details in an overlay. Page scroll is locked while mounted;
/// Escape, the close button, or a backdrop click dismisses it.
#[component]
pub(crate) fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    let mut slide = use_signal(|| 0_usize);

    use_hook(|| dom::lock_body_scroll(true));
    use_drop(|| dom::lock_body_scroll(false));

    let gallery: Vec<String> = std::iter::once(project.image.clone())
        .chain(project.screenshots.iter().cloned())
        .collect();
    let count = gallery.len();
    let index = slide().min(count - 1);
    let current = gallery[index].clone();
    let position = index + 1;

    let timeline = match project.end_date.as_deref() {
        Some(end) => format!("{} - {end}", project.start_date),
        None => format!("{} - Present", project.start_date),
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: true,
                aria_label: "{project.title}",
                tabindex: "-1",
                autofocus: true,
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                button {
                    class: "icon-button modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    icons::Close {}
                }
                div { class: "modal-gallery",
                    SmartImage { src: current, alt: "{project.title} screenshot {position}" }
                    if count > 1 {
                        button {
                            class: "icon-button gallery-nav gallery-prev",
                            aria_label: "Previous screenshot",
                            onclick: move |_| slide.set(index.checked_sub(1).unwrap_or(count - 1)),
                            icons::ChevronLeft {}
                        }
                        button {
                            class: "icon-button gallery-nav gallery-next",
                            aria_label: "Next screenshot",
                            onclick: move |_| slide.set((index + 1) % count),
                            icons::ChevronRight {}
                        }
                        span { class: "gallery-counter", "{position} / {count}" }
                        div { class: "gallery-dots",
                            for dot in 1..=count {
                                button {
                                    key: "{dot}",
                                    class: "gallery-dot",
                                    class: if dot == position { "is-current" },
                                    aria_label: "Screenshot {dot}",
                                    onclick: move |_| slide.set(dot - 1),
                                }
                            }
                        }
                    }
                }
                div { class: "modal-body",
                    header { class: "modal-heading",
                        h2 { {project.title.clone()} }
                        div { class: "modal-badges",
                            span { class: "chip chip-muted", {project.category.label()} }
                            span { class: "status-badge status-{project.status}",
                                {project.status.label()}
                            }
                        }
                    }
                    p { class: "modal-description", {project.description.clone()} }
                    section {
                        h3 { "Key Features" }
                        ul { class: "modal-list",
                            for feature in &project.features {
                                li { key: "{feature}", {feature.clone()} }
                            }
                        }
                    }
                    if !project.challenges.is_empty() {
                        section {
                            h3 { "Challenges & Solutions" }
                            dl { class: "modal-pairs",
                                for (challenge, solution) in project.challenges.iter().zip(&project.solutions) {
                                    dt { key: "{challenge}", {challenge.clone()} }
                                    dd { {solution.clone()} }
                                }
                            }
                        }
                    }
                    section {
                        h3 { "Technologies" }
                        ul { class: "tech-list",
                            for tech in &project.technologies {
                                li { key: "{tech}", class: "chip", {tech.clone()} }
                            }
                        }
                    }
                    dl { class: "modal-meta",
                        div {
                            dt { "Duration" }
                            dd { {project.duration.clone()} }
                        }
                        div {
                            dt { "Team" }
                            dd { {project.team_size.clone()} }
                        }
                        div {
                            dt { "Role" }
                            dd { {project.role.clone()} }
                        }
                        div {
                            dt { "Timeline" }
                            dd { {timeline} }
                        }
                    }
                    div { class: "modal-links",
                        if let Some(repository) = project.repository.clone() {
                            a {
                                class: "button button-outline",
                                href: "{repository}",
                                target: "_blank",
                                rel: "noreferrer",
                                icons::GitHub {}
                                "Source Code"
                            }
                        }
                        if let Some(live_url) = project.live_url.clone() {
                            a {
                                class: "button button-primary",
                                href: "{live_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                icons::ExternalLink {}
                                "Live Demo"
                            }
                        }
                    }
                }
            }
        }
    }
}
