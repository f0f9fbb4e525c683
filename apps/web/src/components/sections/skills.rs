use dioxus::prelude::*;

use crate::components::sections::Section;
use crate::content;
use crate::hooks::use_reveal;

#[component]
pub(crate) fn Skills() -> Element {
    let revealed = use_reveal(Section::Skills.id());

    rsx! {
        section { id: "skills", class: "section skills",
            div {
                class: "section-inner reveal",
                class: if revealed() { "is-revealed" },
                header { class: "section-heading",
                    p { class: "section-eyebrow", "What I work with" }
                    h2 { "Skills" }
                }
                div { class: "skills-grid",
                    for group in content::skill_groups() {
                        div { key: "{group.title}", class: "skill-group",
                            h3 { {group.title.clone()} }
                            ul { class: "skill-list",
                                for item in &group.items {
                                    li { key: "{item}", class: "chip", {item.clone()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
