use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;

use crate::{components::sections::Section, dom};

/// How far below the viewport top a section must reach to count as active.
const SECTION_PROBE: f64 = 120.0;

/// Live window scroll state shared through context. One `scroll` listener
/// feeds every consumer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowScroll {
    pub offset: ReadOnlySignal<f64>,
    pub progress: ReadOnlySignal<f64>,
}

impl WindowScroll {
    pub(crate) fn offset(&self) -> f64 {
        (self.offset)()
    }

    pub(crate) fn progress(&self) -> f64 {
        (self.progress)()
    }
}

/// Install the window scroll listener and provide [`WindowScroll`] to the
/// subtree. Call once, at the application root.
pub(crate) fn provide_window_scroll() -> WindowScroll {
    let offset = use_signal(dom::scroll_offset);
    let progress = use_signal(|| dom::scroll_progress(dom::scroll_offset()));

    use_hook(|| {
        Rc::new(dom::window().map(|window| {
            EventListener::new(&window, "scroll", move |_| {
                let y = dom::scroll_offset();
                let mut offset = offset;
                let mut progress = progress;
                offset.set(y);
                progress.set(dom::scroll_progress(y));
            })
        }))
    });

    use_context_provider(|| WindowScroll { offset: offset.into(), progress: progress.into() })
}

pub(crate) fn use_window_scroll() -> WindowScroll {
    use_context::<WindowScroll>()
}

/// The section the viewport is currently inside, re-evaluated on scroll but
/// only propagated when the answer changes.
pub(crate) fn use_active_section(scroll: WindowScroll) -> Memo<Section> {
    use_memo(move || {
        let _ = scroll.offset();

        let tops: Vec<(Section, f64)> = Section::ALL
            .iter()
            .filter_map(|section| {
                dom::section_top(section.id()).map(|top| (*section, top))
            })
            .collect();
        pick_active(&tops, SECTION_PROBE)
    })
}

/// Last section whose top sits above the probe line, defaulting to the
/// first section while everything is still below it.
fn pick_active(tops: &[(Section, f64)], probe: f64) -> Section {
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= probe)
        .map_or(Section::Home, |(section, _)| *section)
}

#[cfg(test)]
mod tests {
    use super::{SECTION_PROBE, pick_active};
    use crate::components::sections::Section;

    fn page(offset: f64) -> Vec<(Section, f64)> {
        // Five full-height sections, shifted up as the page scrolls.
        Section::ALL
            .iter()
            .zip([0.0_f64, 900.0, 1_800.0, 2_700.0, 3_600.0])
            .map(|(section, top)| (*section, top - offset))
            .collect()
    }

    #[test]
    fn the_top_of_the_page_is_home() {
        assert_eq!(pick_active(&page(0.0), SECTION_PROBE), Section::Home);
    }

    #[test]
    fn scrolling_walks_through_the_sections() {
        assert_eq!(pick_active(&page(1_000.0), SECTION_PROBE), Section::About);
        assert_eq!(pick_active(&page(1_900.0), SECTION_PROBE), Section::Skills);
        assert_eq!(pick_active(&page(3_600.0), SECTION_PROBE), Section::Contact);
    }

    #[test]
    fn a_section_activates_only_past_the_probe_line() {
        // About's top is 130px below the viewport top: not yet active.
        let tops = vec![(Section::Home, -770.0), (Section::About, 130.0)];
        assert_eq!(pick_active(&tops, SECTION_PROBE), Section::Home);

        let tops = vec![(Section::Home, -790.0), (Section::About, 110.0)];
        assert_eq!(pick_active(&tops, SECTION_PROBE), Section::About);
    }

    #[test]
    fn no_measurable_sections_defaults_to_home() {
        assert_eq!(pick_active(&[], SECTION_PROBE), Section::Home);
    }
}
