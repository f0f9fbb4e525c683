//! Shared reactive hooks: window scroll state, reveal-on-scroll, and the
//! theme controller.

mod reveal;
mod scroll;
mod theme;

pub(crate) use self::{
    reveal::use_reveal,
    scroll::{WindowScroll, provide_window_scroll, use_active_section, use_window_scroll},
    theme::{ThemeController, provide_theme, use_theme},
};
