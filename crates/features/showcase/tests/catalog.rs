use std::collections::HashSet;

use folio_domain::project::{ProjectCategory, ProjectStatus};
use folio_showcase::{CategoryFilter, catalog, count_matching, filter_projects, project_by_id};
use strum::IntoEnumIterator;

#[test]
fn every_category_is_represented() {
    let present: HashSet<ProjectCategory> =
        catalog().iter().map(|project| project.category).collect();

    for category in ProjectCategory::iter() {
        assert!(present.contains(&category), "no project in {category}");
    }
}

#[test]
fn ids_are_unique() {
    let ids: HashSet<u32> = catalog().iter().map(|project| project.id).collect();
    assert_eq!(ids.len(), catalog().len());
}

#[test]
fn lookup_by_id() {
    let portfolio = project_by_id(catalog(), 4).unwrap();
    assert_eq!(portfolio.title, "Portfolio Website");

    assert!(project_by_id(catalog(), 9999).is_none());
}

#[test]
fn filter_bar_order_and_labels() {
    let variants = CategoryFilter::variants();
    let labels: Vec<&str> = variants.iter().map(|filter| filter.label()).collect();

    assert_eq!(
        labels,
        ["All Projects", "Full Stack", "Frontend", "Backend", "Mobile"]
    );
}

#[test]
fn the_all_filter_keeps_everything() {
    let filtered = filter_projects(catalog(), CategoryFilter::All);
    assert_eq!(filtered.len(), catalog().len());
}

#[test]
fn a_category_filter_keeps_only_that_category() {
    let filtered = filter_projects(catalog(), CategoryFilter::Only(ProjectCategory::Frontend));

    assert!(!filtered.is_empty());
    assert!(
        filtered
            .iter()
            .all(|project| project.category == ProjectCategory::Frontend)
    );
}

#[test]
fn category_counts_sum_to_the_total() {
    let total = count_matching(catalog(), CategoryFilter::All);
    let per_category: usize = ProjectCategory::iter()
        .map(|category| count_matching(catalog(), CategoryFilter::Only(category)))
        .sum();

    assert_eq!(per_category, total);
}

#[test]
fn entries_are_presentable() {
    for project in catalog() {
        assert!(!project.title.is_empty());
        assert!(!project.summary.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.technologies.is_empty(), "{}", project.title);
        assert!(!project.features.is_empty(), "{}", project.title);
        // The modal renders these as matched pairs.
        assert_eq!(
            project.challenges.len(),
            project.solutions.len(),
            "{}",
            project.title
        );
    }
}

#[test]
fn only_finished_projects_carry_an_end_date() {
    for project in catalog() {
        match project.status {
            ProjectStatus::Completed => {
                assert!(project.end_date.is_some(), "{}", project.title);
            }
            ProjectStatus::InProgress | ProjectStatus::Planned => {
                assert!(project.end_date.is_none(), "{}", project.title);
            }
        }
    }
}
