use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A portfolio project record, defined at build time.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// One-liner shown on the grid card.
    pub summary: String,
    /// Long form description shown in the detail modal.
    pub description: String,
    pub image: String,
    pub screenshots: Vec<String>,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub duration: String,
    pub team_size: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub repository: Option<String>,
    pub live_url: Option<String>,
}

/// The finite category set projects are filtered by.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Fullstack,
    Frontend,
    Backend,
    Mobile,
}

impl ProjectCategory {
    /// Human readable label for chips and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fullstack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
        }
    }
}

/// Delivery status shown as a colored badge.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    /// Human readable label for chips and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }
}
