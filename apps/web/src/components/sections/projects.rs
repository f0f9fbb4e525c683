use dioxus::prelude::*;

use folio::domain::project::Project;
use folio::features::showcase::{
    catalog, count_matching, filter_projects, project_by_id, CategoryFilter,
};

use crate::components::sections::Section;
use crate::components::ui::{icons, ProjectModal, SmartImage};
use crate::hooks::use_reveal;

/// How many technology chips a card shows before collapsing into "+n".
const CARD_TECH_LIMIT: usize = 4;

#[component]
pub(crate) fn Projects() -> Element {
    let revealed = use_reveal(Section::Projects.id());
    let mut filter = use_signal(CategoryFilter::default);
    let mut selected = use_signal(|| None::<u32>);

    let visible = use_memo(move || filter_projects(catalog(), filter()));

    rsx! {
        section { id: "projects", class: "section projects",
            div {
                class: "section-inner reveal",
                class: if revealed() { "is-revealed" },
                header { class: "section-heading",
                    p { class: "section-eyebrow", "Things I've built" }
                    h2 { "Featured Projects" }
                }
                div { class: "filter-bar", role: "tablist", aria_label: "Project category",
                    for option in CategoryFilter::variants() {
                        button {
                            key: "{option.label()}",
                            class: "filter-button",
                            class: if filter() == option { "is-active" },
                            role: "tab",
                            aria_selected: filter() == option,
                            onclick: move |_| filter.set(option),
                            {option.label()}
                            span { class: "filter-count",
                                {count_matching(catalog(), option).to_string()}
                            }
                        }
                    }
                }
                div { class: "project-grid",
                    for project in visible() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            on_open: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }
        }
        if let Some(project) = selected().and_then(|id| project_by_id(catalog(), id)) {
            ProjectModal {
                project: project.clone(),
                on_close: move |()| selected.set(None),
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<u32>) -> Element {
    let id = project.id;
    let hidden_tech = project.technologies.len().saturating_sub(CARD_TECH_LIMIT);

    rsx! {
        article { class: "project-card",
            div { class: "project-cover",
                SmartImage { src: project.image.clone(), alt: project.title.clone() }
                span { class: "status-badge status-{project.status}", {project.status.label()} }
            }
            div { class: "project-body",
                div { class: "project-title-row",
                    h3 { {project.title.clone()} }
                    span { class: "chip chip-muted", {project.category.label()} }
                }
                p { class: "project-summary", {project.summary.clone()} }
                ul { class: "tech-list",
                    for tech in project.technologies.iter().take(CARD_TECH_LIMIT) {
                        li { key: "{tech}", class: "chip", {tech.clone()} }
                    }
                    if hidden_tech > 0 {
                        li { class: "chip chip-muted", "+{hidden_tech}" }
                    }
                }
                div { class: "project-actions",
                    button {
                        class: "button button-primary",
                        onclick: move |_| on_open.call(id),
                        "Details"
                    }
                    if let Some(repository) = project.repository.clone() {
                        a {
                            class: "icon-button",
                            href: "{repository}",
                            target: "_blank",
                            rel: "noreferrer",
                            aria_label: "Source code",
                            icons::GitHub {}
                        }
                    }
                    if let Some(live_url) = project.live_url.clone() {
                        a {
                            class: "icon-button",
                            href: "{live_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            aria_label: "Live site",
                            icons::ExternalLink {}
                        }
                    }
                }
            }
        }
    }
}
