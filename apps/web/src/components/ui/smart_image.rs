use dioxus::prelude::*;

use crate::app;
use crate::components::ui::icons;

/// Load lifecycle of a [`SmartImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Ready,
    Failed,
}

/// Picks the next source after a load error: the bundled placeholder the
/// first time, nothing once the placeholder itself failed.
fn fallback_swap(current: &str, placeholder: &str) -> Option<String> {
    (current != placeholder).then(|| placeholder.to_owned())
}

/// An `img` that shimmers while loading, fades in when ready, and falls back
/// to the bundled placeholder on error.
#[component]
pub(crate) fn SmartImage(src: ReadOnlySignal<String>, alt: String) -> Element {
    let mut current = use_signal(move || src());
    let mut phase = use_signal(|| Phase::Loading);

    // A new source restarts the lifecycle.
    use_effect(move || {
        current.set(src());
        phase.set(Phase::Loading);
    });

    let placeholder = app::PLACEHOLDER.to_string();

    rsx! {
        div {
            class: "smart-image",
            class: if phase() == Phase::Ready { "is-loaded" },
            if phase() == Phase::Failed {
                div { class: "smart-image-fallback",
                    icons::Broken {}
                }
            } else {
                img {
                    src: "{current}",
                    alt: "{alt}",
                    loading: "lazy",
                    onload: move |_| phase.set(Phase::Ready),
                    onerror: move |_| {
                        if let Some(next) = fallback_swap(&current(), &placeholder) {
                            tracing::debug!("Image '{}' failed to load, using placeholder", current());
                            current.set(next);
                            phase.set(Phase::Loading);
                        } else {
                            phase.set(Phase::Failed);
                        }
                    },
                }
            }
            if phase() == Phase::Loading {
                div { class: "smart-image-shimmer", aria_hidden: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_swap;

    #[test]
    fn a_failed_image_swaps_to_the_placeholder_once() {
        let swapped = fallback_swap("/images/shop.webp", "/assets/placeholder.svg");
        assert_eq!(swapped.as_deref(), Some("/assets/placeholder.svg"));
    }

    #[test]
    fn a_failed_placeholder_gives_up() {
        assert_eq!(fallback_swap("/assets/placeholder.svg", "/assets/placeholder.svg"), None);
    }
}
