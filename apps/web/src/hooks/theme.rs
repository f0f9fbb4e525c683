use std::rc::Rc;

use dioxus::prelude::*;
use folio::features::theme::{ColorScheme, ThemePreference, stored_preference, store_preference};
use gloo_events::EventListener;
use strum::IntoEnumIterator;

use crate::dom;

/// Theme state shared through context: the visitor's explicit preference
/// plus the scheme the operating system currently reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThemeController {
    preference: Signal<ThemePreference>,
    system: Signal<ColorScheme>,
}

impl ThemeController {
    pub(crate) fn preference(&self) -> ThemePreference {
        (self.preference)()
    }

    pub(crate) fn system_scheme(&self) -> ColorScheme {
        (self.system)()
    }

    pub(crate) fn resolved(&self) -> ColorScheme {
        self.preference().resolve(self.system_scheme())
    }

    /// Adopt and persist a preference. Persistence is best effort; the
    /// in-memory state flips either way.
    pub(crate) fn set(&self, preference: ThemePreference) {
        let mut signal = self.preference;
        signal.set(preference);
        if let Err(err) = store_preference(preference) {
            tracing::warn!("theme preference not persisted: {err}");
        }
    }

    /// Step to the next preference in the toggle order.
    pub(crate) fn cycle(&self) {
        self.set(next_preference(self.preference()));
    }
}

/// Light, dark, then back to following the system.
fn next_preference(current: ThemePreference) -> ThemePreference {
    ThemePreference::iter()
        .cycle()
        .skip_while(|preference| *preference != current)
        .nth(1)
        .unwrap_or_default()
}

fn initial_preference() -> ThemePreference {
    match stored_preference() {
        Ok(Some(preference)) => preference,
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            tracing::warn!("stored theme preference unreadable: {err}");
            ThemePreference::default()
        }
    }
}

/// Provide the [`ThemeController`], track live OS scheme changes, and keep
/// the `<html>` class in sync with the resolved scheme. Call once, at the
/// application root.
pub(crate) fn provide_theme() -> ThemeController {
    let preference = use_signal(initial_preference);
    let system = use_signal(dom::system_color_scheme);

    let controller = use_context_provider(|| ThemeController { preference, system });

    // A "system" preference should follow the OS while the page is open.
    use_hook(|| {
        Rc::new(dom::media_query(dom::PREFERS_DARK).map(|query| {
            EventListener::new(&query, "change", move |_| {
                let mut system = system;
                system.set(dom::system_color_scheme());
            })
        }))
    });

    use_effect(move || {
        dom::apply_color_scheme(controller.resolved());
    });

    controller
}

pub(crate) fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}

#[cfg(test)]
mod tests {
    use folio::features::theme::ThemePreference;

    use super::next_preference;

    #[test]
    fn the_toggle_order_is_light_dark_system() {
        assert_eq!(next_preference(ThemePreference::Light), ThemePreference::Dark);
        assert_eq!(next_preference(ThemePreference::Dark), ThemePreference::System);
        assert_eq!(next_preference(ThemePreference::System), ThemePreference::Light);
    }

    #[test]
    fn three_steps_return_to_the_start() {
        let mut preference = ThemePreference::default();
        for _ in 0..3 {
            preference = next_preference(preference);
        }
        assert_eq!(preference, ThemePreference::default());
    }
}
