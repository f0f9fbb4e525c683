use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::{self, VisibilityObserver};

/// Fraction of the element that must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;
/// Pull the bottom edge of the viewport up a little so elements reveal
/// while still comfortably inside it.
const REVEAL_MARGIN: &str = "0px 0px -40px 0px";

/// Reveal-once visibility for the element with `target_id`.
///
/// Starts `false`, flips to `true` the first time the element intersects
/// the viewport, then stays `true`; the underlying observer is dropped as
/// soon as it has fired. When observation is impossible the hook reports
/// `true` immediately so content is never stuck hidden.
pub(crate) fn use_reveal(target_id: &'static str) -> ReadOnlySignal<bool> {
    let visible = use_signal(|| false);
    let handle: Rc<RefCell<Option<VisibilityObserver>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let observer = handle.clone();
    use_effect(move || {
        if visible() {
            // One-shot: the observer has served its purpose.
            if let Some(observer) = observer.borrow_mut().take() {
                observer.disconnect();
            }
            return;
        }
        if observer.borrow().is_some() {
            return;
        }

        let mut visible = visible;
        match dom::observe_visibility(target_id, REVEAL_THRESHOLD, REVEAL_MARGIN, move || {
            visible.set(true);
        }) {
            Ok(created) => *observer.borrow_mut() = Some(created),
            Err(err) => {
                tracing::debug!("reveal observer unavailable for #{target_id}: {err:?}");
                visible.set(true);
            }
        }
    });

    use_drop(move || {
        if let Some(observer) = handle.borrow_mut().take() {
            observer.disconnect();
        }
    });

    visible.into()
}
