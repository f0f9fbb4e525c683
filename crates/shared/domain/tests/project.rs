use folio_domain::project::{Project, ProjectCategory, ProjectStatus};
use serde_json::json;
use strum::IntoEnumIterator;

#[test]
fn category_serializes_lowercase() {
    let tags: Vec<String> = ProjectCategory::iter().map(|c| c.to_string()).collect();
    assert_eq!(tags, ["fullstack", "frontend", "backend", "mobile"]);

    let parsed: ProjectCategory = serde_json::from_value(json!("mobile")).expect("category");
    assert_eq!(parsed, ProjectCategory::Mobile);
}

#[test]
fn status_serializes_kebab_case() {
    assert_eq!(ProjectStatus::InProgress.to_string(), "in-progress");
    assert_eq!(ProjectStatus::InProgress.label(), "In Progress");

    let parsed: ProjectStatus = serde_json::from_value(json!("in-progress")).expect("status");
    assert_eq!(parsed, ProjectStatus::InProgress);
}

#[test]
fn project_round_trips_camel_case() {
    let project = Project {
        id: 4,
        title: "Portfolio Website".to_owned(),
        summary: "Personal site".to_owned(),
        team_size: "Solo project".to_owned(),
        start_date: "2024-12".to_owned(),
        live_url: Some("https://trahoangdev.com".to_owned()),
        ..Project::default()
    };

    let value = serde_json::to_value(&project).expect("serialize");
    assert_eq!(value["teamSize"], "Solo project");
    assert_eq!(value["startDate"], "2024-12");
    assert_eq!(value["liveUrl"], "https://trahoangdev.com");

    let back: Project = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, project);
}
