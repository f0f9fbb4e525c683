//! Thin wrappers over `web-sys`.
//!
//! Browser lookups return `Option`, and every operation degrades to a no-op
//! (or a neutral value) when the object it needs is missing. Off wasm32 the
//! module still compiles, which keeps the pure helpers testable on the host.

use folio::features::theme::ColorScheme;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

pub(crate) const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window().and_then(|window| window.document())
}

fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

/// Current vertical scroll offset in CSS pixels.
pub(crate) fn scroll_offset() -> f64 {
    window().and_then(|window| window.scroll_y().ok()).unwrap_or(0.0)
}

/// How far through the page the viewport has scrolled, in `0.0..=1.0`.
pub(crate) fn scroll_progress(offset: f64) -> f64 {
    let total = document()
        .and_then(|document| document.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()) - f64::from(root.client_height()));
    ratio(offset, total)
}

/// A page that cannot scroll reports zero progress, not a division by zero.
pub(crate) fn ratio(offset: f64, total: f64) -> f64 {
    if total <= 0.0 { 0.0 } else { (offset / total).clamp(0.0, 1.0) }
}

pub(crate) fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the element with `id`. Returns `false` when the element
/// is not in the document, so callers can fall back to navigation.
pub(crate) fn scroll_to_section(id: &str) -> bool {
    match element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Viewport-relative top of the element with `id`.
pub(crate) fn section_top(id: &str) -> Option<f64> {
    element_by_id(id).map(|element| element.get_bounding_client_rect().top())
}

pub(crate) fn media_query(query: &str) -> Option<MediaQueryList> {
    window().and_then(|window| window.match_media(query).ok().flatten())
}

/// What the operating system currently prefers.
pub(crate) fn system_color_scheme() -> ColorScheme {
    if media_query(PREFERS_DARK).is_some_and(|query| query.matches()) {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

/// Swap the scheme class on `<html>`; the stylesheet keys off `.dark`.
pub(crate) fn apply_color_scheme(scheme: ColorScheme) {
    if let Some(root) = document().and_then(|document| document.document_element()) {
        let classes = root.class_list();
        let _ = classes.remove_2(ColorScheme::Light.as_class(), ColorScheme::Dark.as_class());
        let _ = classes.add_1(scheme.as_class());
    }
}

/// Toggle page scrolling, used while the project modal is open.
pub(crate) fn lock_body_scroll(locked: bool) {
    if let Some(body) = document().and_then(|document| document.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Upsert a `<script type="application/ld+json">` tag in the document head.
pub(crate) fn inject_json_ld(id: &str, json: &str) {
    let Some(document) = document() else { return };
    remove_json_ld(id);

    let Ok(script) = document.create_element("script") else { return };
    let _ = script.set_attribute("type", "application/ld+json");
    let _ = script.set_attribute("id", id);
    script.set_text_content(Some(json));

    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

pub(crate) fn remove_json_ld(id: &str) {
    if let Some(script) = element_by_id(id) {
        script.remove();
    }
}

/// An [`IntersectionObserver`] kept alive together with its callback.
pub(crate) struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl std::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityObserver").finish_non_exhaustive()
    }
}

impl VisibilityObserver {
    pub(crate) fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Watch the element with `id` and call `on_visible` every time at least
/// `threshold` of it crosses into the adjusted viewport.
///
/// # Errors
///
/// Fails when the element is not in the document or the observer cannot be
/// constructed.
pub(crate) fn observe_visibility(
    id: &str,
    threshold: f64,
    root_margin: &str,
    mut on_visible: impl FnMut() + 'static,
) -> Result<VisibilityObserver, JsValue> {
    let element =
        element_by_id(id).ok_or_else(|| JsValue::from_str("observed element is not mounted"))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if intersecting {
                on_visible();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&element);

    Ok(VisibilityObserver { observer, _callback: callback })
}

#[cfg(test)]
mod tests {
    use super::ratio;

    #[test]
    fn progress_is_clamped() {
        assert!((ratio(50.0, 200.0) - 0.25).abs() < f64::EPSILON);
        assert!((ratio(300.0, 200.0) - 1.0).abs() < f64::EPSILON);
        assert!((ratio(-10.0, 200.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn an_unscrollable_page_reports_zero() {
        assert!(ratio(0.0, 0.0).abs() < f64::EPSILON);
        assert!(ratio(100.0, -5.0).abs() < f64::EPSILON);
    }
}
