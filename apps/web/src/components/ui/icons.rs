//! Inline icon set, traced from the Lucide outlines. Keeping the paths in the
//! bundle avoids a font or sprite-sheet request.

use dioxus::prelude::*;

use folio::domain::profile::{HighlightIcon, SocialKind};

/// Shared frame: 24px viewBox, stroked paths, colored by the surrounding text.
#[component]
fn IconSvg(children: Element) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": true,
            {children}
        }
    }
}

#[component]
pub(crate) fn SocialIcon(kind: SocialKind) -> Element {
    match kind {
        SocialKind::GitHub => rsx! {
            GitHub {}
        },
        SocialKind::LinkedIn => rsx! {
            LinkedIn {}
        },
        SocialKind::Email => rsx! {
            Mail {}
        },
    }
}

#[component]
pub(crate) fn HighlightGlyph(icon: HighlightIcon) -> Element {
    match icon {
        HighlightIcon::Code => rsx! {
            Code {}
        },
        HighlightIcon::Design => rsx! {
            PenTool {}
        },
        HighlightIcon::Performance => rsx! {
            Zap {}
        },
    }
}

#[component]
pub(crate) fn GitHub() -> Element {
    rsx! {
        IconSvg {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        }
    }
}

#[component]
pub(crate) fn LinkedIn() -> Element {
    rsx! {
        IconSvg {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        }
    }
}

#[component]
pub(crate) fn Mail() -> Element {
    rsx! {
        IconSvg {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub(crate) fn Phone() -> Element {
    rsx! {
        IconSvg {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

#[component]
pub(crate) fn MapPin() -> Element {
    rsx! {
        IconSvg {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub(crate) fn Sun() -> Element {
    rsx! {
        IconSvg {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub(crate) fn Moon() -> Element {
    rsx! {
        IconSvg {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub(crate) fn Monitor() -> Element {
    rsx! {
        IconSvg {
            rect { x: "2", y: "3", width: "20", height: "14", rx: "2" }
            line { x1: "8", y1: "21", x2: "16", y2: "21" }
            line { x1: "12", y1: "17", x2: "12", y2: "21" }
        }
    }
}

#[component]
pub(crate) fn Menu() -> Element {
    rsx! {
        IconSvg {
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

#[component]
pub(crate) fn Close() -> Element {
    rsx! {
        IconSvg {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub(crate) fn ArrowUp() -> Element {
    rsx! {
        IconSvg {
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        }
    }
}

#[component]
pub(crate) fn ArrowDown() -> Element {
    rsx! {
        IconSvg {
            path { d: "M12 5v14" }
            path { d: "m19 12-7 7-7-7" }
        }
    }
}

#[component]
pub(crate) fn ExternalLink() -> Element {
    rsx! {
        IconSvg {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

#[component]
pub(crate) fn Code() -> Element {
    rsx! {
        IconSvg {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        }
    }
}

#[component]
pub(crate) fn PenTool() -> Element {
    rsx! {
        IconSvg {
            path { d: "m12 19 7-7 3 3-7 7-3-3z" }
            path { d: "m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" }
            path { d: "m2 2 7.586 7.586" }
            circle { cx: "11", cy: "11", r: "2" }
        }
    }
}

#[component]
pub(crate) fn Zap() -> Element {
    rsx! {
        IconSvg {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        }
    }
}

#[component]
pub(crate) fn Download() -> Element {
    rsx! {
        IconSvg {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", y1: "15", x2: "12", y2: "3" }
        }
    }
}

#[component]
pub(crate) fn Send() -> Element {
    rsx! {
        IconSvg {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        }
    }
}

#[component]
pub(crate) fn Broken() -> Element {
    rsx! {
        IconSvg {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        }
    }
}

#[component]
pub(crate) fn ChevronLeft() -> Element {
    rsx! {
        IconSvg {
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

#[component]
pub(crate) fn ChevronRight() -> Element {
    rsx! {
        IconSvg {
            path { d: "m9 18 6-6-6-6" }
        }
    }
}
