use folio_domain::project::{Project, ProjectCategory};
use folio_showcase::{CategoryFilter, count_matching, filter_projects};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn synthetic(id: u32, category: ProjectCategory) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        category,
        ..Project::default()
    }
}

fn any_category() -> impl Strategy<Value = ProjectCategory> {
    proptest::sample::select(ProjectCategory::iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn per_category_counts_partition_the_catalog(
        categories in proptest::collection::vec(any_category(), 0..64),
    ) {
        let projects: Vec<Project> = categories
            .iter()
            .enumerate()
            .map(|(index, category)| synthetic(u32::try_from(index).unwrap(), *category))
            .collect();

        let total = count_matching(&projects, CategoryFilter::All);
        prop_assert_eq!(total, projects.len());

        let sum: usize = ProjectCategory::iter()
            .map(|category| count_matching(&projects, CategoryFilter::Only(category)))
            .sum();
        prop_assert_eq!(sum, total);
    }

    #[test]
    fn filtering_keeps_catalog_order(
        categories in proptest::collection::vec(any_category(), 0..64),
        pick in any_category(),
    ) {
        let projects: Vec<Project> = categories
            .iter()
            .enumerate()
            .map(|(index, category)| synthetic(u32::try_from(index).unwrap(), *category))
            .collect();

        let filtered = filter_projects(&projects, CategoryFilter::Only(pick));

        prop_assert!(filtered.iter().all(|project| project.category == pick));
        prop_assert_eq!(filtered.len(), count_matching(&projects, CategoryFilter::Only(pick)));

        let ids: Vec<u32> = filtered.iter().map(|project| project.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }
}
