use dioxus::prelude::*;

/// One blurred orb in the backdrop. Placement is in viewport percent, size in
/// pixels; delay and duration feed the `glow-drift` animation.
struct Glow {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
    duration: f64,
    tint: &'static str,
}

/// Fixed placements so the backdrop is identical on every visit.
const GLOWS: [Glow; 8] = [
    Glow { left: 15.0, top: 10.0, size: 120.0, delay: 0.0, duration: 20.0, tint: "glow-blue" },
    Glow { left: 80.0, top: 20.0, size: 150.0, delay: 2.0, duration: 25.0, tint: "glow-blue" },
    Glow { left: 10.0, top: 60.0, size: 100.0, delay: 4.0, duration: 22.0, tint: "glow-blue" },
    Glow { left: 75.0, top: 70.0, size: 130.0, delay: 6.0, duration: 28.0, tint: "glow-violet" },
    Glow { left: 50.0, top: 40.0, size: 110.0, delay: 1.0, duration: 24.0, tint: "glow-violet" },
    Glow { left: 30.0, top: 85.0, size: 140.0, delay: 3.0, duration: 26.0, tint: "glow-violet" },
    Glow { left: 60.0, top: 30.0, size: 90.0, delay: 5.0, duration: 23.0, tint: "glow-pink" },
    Glow { left: 90.0, top: 55.0, size: 120.0, delay: 7.0, duration: 27.0, tint: "glow-pink" },
];

/// Full-viewport decorative backdrop: a line grid with a second, slowly
/// drifting layer, under eight blurred glow orbs. Every color comes from the
/// theme custom properties, so the backdrop follows light/dark switches with
/// no work on this side.
#[component]
pub(crate) fn AnimatedGrid() -> Element {
    rsx! {
        div { class: "animated-grid", aria_hidden: true,
            div { class: "grid-lines" }
            div { class: "grid-lines grid-lines-drift" }
            for (index, glow) in GLOWS.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "grid-glow {glow.tint}",
                    style: "left: {glow.left}%; top: {glow.top}%; width: {glow.size}px; height: {glow.size}px; animation-delay: {glow.delay}s; animation-duration: {glow.duration}s;",
                }
            }
        }
    }
}
