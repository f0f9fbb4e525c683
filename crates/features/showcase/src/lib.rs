//! # Showcase
//!
//! Project catalog and the category filter that drives the projects grid.
//!
//! The catalog is fixed at build time; filtering never clones a project, it
//! hands back references into the catalog in their original order.

mod catalog;

use folio_domain::project::{Project, ProjectCategory};
use strum::IntoEnumIterator;

pub use self::catalog::catalog;

/// Selection state of the filter bar above the projects grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Every filter in display order: `All` first, then one per category.
    #[must_use]
    pub fn variants() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::iter().map(Self::Only))
            .collect()
    }

    /// Button label for the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    /// Whether `project` survives this filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects surviving `filter`, in catalog order.
#[must_use]
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

/// How many projects survive `filter`, for the count badge on each button.
#[must_use]
pub fn count_matching(projects: &[Project], filter: CategoryFilter) -> usize {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .count()
}

/// Look a project up by its stable id, for the detail modal.
#[must_use]
pub fn project_by_id(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|project| project.id == id)
}
