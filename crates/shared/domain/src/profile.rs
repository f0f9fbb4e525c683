use serde::{Deserialize, Serialize};

/// Site owner identity and page-level copy.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Short professional headline shown under the name.
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Path to the avatar image, resolved relative to the site root.
    pub avatar: String,
    /// Path to the downloadable CV document.
    pub cv_url: String,
    pub site_url: String,
    /// Availability chip text, e.g. "Available for work".
    pub availability: String,
}

impl Profile {
    /// Uppercase initials of the first two name parts.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// An external profile link rendered as an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub kind: SocialKind,
}

/// Which icon a [`SocialLink`] renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

/// A highlight card in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    pub blurb: String,
    pub icon: HighlightIcon,
}

/// Which icon a [`Highlight`] card renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightIcon {
    Code,
    Design,
    Performance,
}

/// A titled column in the skills table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}
