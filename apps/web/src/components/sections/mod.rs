mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub(crate) use about::About;
pub(crate) use contact::Contact;
pub(crate) use hero::Hero;
pub(crate) use projects::Projects;
pub(crate) use skills::Skills;

/// The single-page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] =
        [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// The DOM id of the wrapping element, used as anchor target.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}
