use dioxus::prelude::*;

use crate::components::sections::Section;
use crate::components::ui::icons;
use crate::content;
use crate::hooks::use_reveal;

#[component]
pub(crate) fn About() -> Element {
    let revealed = use_reveal(Section::About.id());

    rsx! {
        section { id: "about", class: "section about",
            div {
                class: "section-inner reveal",
                class: if revealed() { "is-revealed" },
                header { class: "section-heading",
                    p { class: "section-eyebrow", "Get to know me" }
                    h2 { "About Me" }
                }
                div { class: "about-grid",
                    div { class: "about-prose",
                        for paragraph in content::about_paragraphs() {
                            p { {*paragraph} }
                        }
                    }
                    div { class: "about-highlights",
                        for highlight in content::highlights() {
                            article { key: "{highlight.title}", class: "highlight-card",
                                span { class: "highlight-icon", aria_hidden: true,
                                    icons::HighlightGlyph { icon: highlight.icon }
                                }
                                h3 { {highlight.title.clone()} }
                                p { {highlight.blurb.clone()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
