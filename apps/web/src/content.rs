//! Site copy, fixed at build time: the owner profile, social links, about
//! highlights, skill groups, and the structured-data descriptors derived
//! from them.

use std::sync::LazyLock;

use folio::domain::profile::{
    Highlight, HighlightIcon, Profile, SkillGroup, SocialKind, SocialLink,
};
use folio::domain::schema::{Organization, PersonRef, PersonSchema, PostalAddress, WebSiteSchema};

pub(crate) fn profile() -> &'static Profile {
    &PROFILE
}

pub(crate) fn socials() -> &'static [SocialLink] {
    &SOCIALS
}

pub(crate) fn about_paragraphs() -> &'static [&'static str] {
    &[
        "I'm a full stack developer from Da Nang with a soft spot for the \
         unglamorous parts of shipping software: schema design, error states, \
         accessibility, and the last ten percent of polish. Over the past few \
         years I've built storefronts, internal tools, and realtime backends \
         for teams of one to ten.",
        "Lately I've been exploring how far Rust can go in the browser; this \
         site is compiled to WebAssembly as a working answer. When I'm not at \
         a keyboard I'm usually on a motorbike somewhere along the Hai Van \
         pass, or failing to keep basil alive on my balcony.",
    ]
}

pub(crate) fn highlights() -> &'static [Highlight] {
    &HIGHLIGHTS
}

pub(crate) fn skill_groups() -> &'static [SkillGroup] {
    &SKILL_GROUPS
}

/// Six-technology teaser rendered under the hero actions.
pub(crate) fn hero_stack() -> &'static [&'static str] {
    &["Rust", "React", "TypeScript", "Node.js", "PostgreSQL", "AWS"]
}

/// The schema.org `Person` descriptor for the site owner.
pub(crate) fn person_schema() -> PersonSchema {
    let profile = profile();
    PersonSchema {
        name: profile.name.clone(),
        url: profile.site_url.clone(),
        image: format!("{}{}", profile.site_url, profile.avatar),
        same_as: SOCIALS
            .iter()
            .filter(|social| social.kind != SocialKind::Email)
            .map(|social| social.url.clone())
            .collect(),
        job_title: profile.headline.clone(),
        works_for: Organization { name: "Freelance".to_owned(), ..Organization::default() },
        address: PostalAddress {
            address_locality: "Da Nang".to_owned(),
            address_country: "VN".to_owned(),
            ..PostalAddress::default()
        },
        email: format!("mailto:{}", profile.email),
        knows_about: SKILL_GROUPS
            .iter()
            .flat_map(|group| group.items.iter().cloned())
            .collect(),
        ..PersonSchema::default()
    }
}

/// The schema.org `WebSite` descriptor for the site itself.
pub(crate) fn website_schema() -> WebSiteSchema {
    let profile = profile();
    WebSiteSchema {
        name: format!("{} | Portfolio", profile.name),
        url: profile.site_url.clone(),
        description: profile.summary.clone(),
        author: PersonRef { name: profile.name.clone(), ..PersonRef::default() },
        ..WebSiteSchema::default()
    }
}

static PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    name: "Tra Hoang Trong".to_owned(),
    headline: "Full Stack Developer".to_owned(),
    summary: "I build reliable, polished web products end to end, from the \
              database schema to the last pixel. Currently focused on fast, \
              accessible single page apps."
        .to_owned(),
    email: "trahoangdev@gmail.com".to_owned(),
    phone: "+84 905 123 456".to_owned(),
    location: "Da Nang, Vietnam".to_owned(),
    avatar: "/images/avatar.webp".to_owned(),
    cv_url: "/files/tra-hoang-trong-cv.pdf".to_owned(),
    site_url: "https://trahoang.dev".to_owned(),
    availability: "Open to new opportunities".to_owned(),
});

static SOCIALS: LazyLock<Vec<SocialLink>> = LazyLock::new(|| {
    vec![
        SocialLink {
            label: "GitHub".to_owned(),
            url: "https://github.com/trahoangdev".to_owned(),
            kind: SocialKind::GitHub,
        },
        SocialLink {
            label: "LinkedIn".to_owned(),
            url: "https://www.linkedin.com/in/trahoangdev".to_owned(),
            kind: SocialKind::LinkedIn,
        },
        SocialLink {
            label: "Email".to_owned(),
            url: "mailto:trahoangdev@gmail.com".to_owned(),
            kind: SocialKind::Email,
        },
    ]
});

static HIGHLIGHTS: LazyLock<Vec<Highlight>> = LazyLock::new(|| {
    vec![
        Highlight {
            title: "Clean Code".to_owned(),
            blurb: "Readable, tested code the next developer can pick up \
                    without a guided tour."
                .to_owned(),
            icon: HighlightIcon::Code,
        },
        Highlight {
            title: "Thoughtful Design".to_owned(),
            blurb: "Interfaces that stay out of the way: consistent spacing, \
                    real accessibility, honest loading states."
                .to_owned(),
            icon: HighlightIcon::Design,
        },
        Highlight {
            title: "Performance".to_owned(),
            blurb: "Budgets for bundle size and interaction latency, measured \
                    rather than guessed."
                .to_owned(),
            icon: HighlightIcon::Performance,
        },
    ]
});

static SKILL_GROUPS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| {
    let owned = |items: &[&str]| items.iter().map(|&item| item.to_owned()).collect();
    vec![
        SkillGroup {
            title: "Frontend".to_owned(),
            items: owned(&["React", "TypeScript", "Next.js", "Tailwind CSS", "Redux", "HTML & CSS"]),
        },
        SkillGroup {
            title: "Backend".to_owned(),
            items: owned(&["Node.js", "Express", "NestJS", "PostgreSQL", "MongoDB", "Redis"]),
        },
        SkillGroup {
            title: "Tools & Platforms".to_owned(),
            items: owned(&["Docker", "Git", "AWS", "Linux", "Figma", "Rust"]),
        },
    ]
});

#[cfg(test)]
mod tests {
    use folio::domain::schema::SCHEMA_CONTEXT;

    use super::{hero_stack, person_schema, profile, skill_groups, website_schema};

    #[test]
    fn schemas_carry_the_vocabulary_header() {
        let person = serde_json::to_value(person_schema()).unwrap();
        assert_eq!(person["@context"], SCHEMA_CONTEXT);
        assert_eq!(person["@type"], "Person");
        assert_eq!(person["jobTitle"], "Full Stack Developer");
        assert!(person["sameAs"].as_array().is_some_and(|links| links.len() == 2));

        let site = serde_json::to_value(website_schema()).unwrap();
        assert_eq!(site["@type"], "WebSite");
        assert_eq!(site["author"]["@type"], "Person");
        assert_eq!(site["inLanguage"], "en");
    }

    #[test]
    fn the_person_knows_every_listed_skill() {
        let person = person_schema();
        let chips: usize = skill_groups().iter().map(|group| group.items.len()).sum();
        assert_eq!(person.knows_about.len(), chips);
    }

    #[test]
    fn the_hero_teaser_only_names_listed_skills() {
        let all: Vec<&str> = skill_groups()
            .iter()
            .flat_map(|group| group.items.iter().map(String::as_str))
            .collect();
        for tech in hero_stack() {
            assert!(all.contains(tech), "{tech} missing from the skill groups");
        }
    }

    #[test]
    fn initials_come_from_the_first_two_names() {
        assert_eq!(profile().initials(), "TH");
    }
}
