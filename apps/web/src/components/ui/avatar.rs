use dioxus::prelude::*;
use folio::kernel::css::classes;

/// Render size of an [`Avatar`], mapped onto a CSS class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AvatarSize {
    #[default]
    Md,
    Xxl,
}

impl AvatarSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Md => "avatar-md",
            Self::Xxl => "avatar-xxl",
        }
    }
}

/// Portrait image with an initials fallback and an optional status dot.
#[component]
pub(crate) fn Avatar(
    src: String,
    alt: String,
    initials: String,
    #[props(default)] size: AvatarSize,
    status: Option<String>,
) -> Element {
    let mut failed = use_signal(|| false);
    let shell = classes(["avatar", size.class()]);

    rsx! {
        div { class: shell,
            if failed() {
                span { class: "avatar-initials", aria_label: "{alt}", {initials} }
            } else {
                img {
                    class: "avatar-image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| failed.set(true),
                }
            }
            if let Some(status) = status {
                span { class: "avatar-status", title: "{status}" }
            }
        }
    }
}
