mod animated_grid;
mod avatar;
mod back_to_top;
pub(crate) mod icons;
mod project_modal;
mod scroll_progress;
mod smart_image;
mod theme_toggle;

pub(crate) use animated_grid::AnimatedGrid;
pub(crate) use avatar::{Avatar, AvatarSize};
pub(crate) use back_to_top::BackToTop;
pub(crate) use project_modal::ProjectModal;
pub(crate) use scroll_progress::ScrollProgress;
pub(crate) use smart_image::SmartImage;
pub(crate) use theme_toggle::{ThemeRow, ThemeToggle};
