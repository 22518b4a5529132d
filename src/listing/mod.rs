//! Client-side list view over a fetched page of jobs.
//!
//! The view is derived in a fixed order: search filter, stable sort, then
//! category filter. It only ever sees the current page.

mod sort;

pub use sort::{created_instant, locale_cmp, parse_timestamp, SortDirection, SortField, SortSpec};

use crate::api::Job;

/// Return the jobs to display for the given inputs.
///
/// Keeps jobs whose name contains `search_term` ignoring case, sorts them
/// stably by `sort` (input order when no field is set), and finally keeps only
/// jobs whose upper-cased category is in `categories` when that set is not
/// empty. Jobs without a category tag are dropped once a category is selected.
///
pub fn derive_view(
    jobs: &[Job],
    search_term: &str,
    sort: &SortSpec,
    categories: &[String],
) -> Vec<Job> {
    let needle = search_term.to_lowercase();
    let mut view: Vec<Job> = jobs
        .iter()
        .filter(|job| needle.is_empty() || job.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if sort.field.is_some() {
        view.sort_by(|a, b| sort.compare(a, b));
    }

    if !categories.is_empty() {
        view.retain(|job| match job.category() {
            Some(category) => categories.contains(&category.to_uppercase()),
            None => false,
        });
    }
    view
}

/// Move the row at `from` to `to` within a derived view. Out-of-range indices
/// leave the view untouched. Returns true if the view changed.
///
pub fn move_row(view: &mut Vec<Job>, from: usize, to: usize) -> bool {
    if from >= view.len() || to >= view.len() || from == to {
        return false;
    }
    let job = view.remove(from);
    view.insert(to, job);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Tag;
    use fake::{Fake, Faker};

    fn job(id: u64, name: &str, created_at: &str, category: Option<&str>) -> Job {
        Job {
            id,
            name: name.to_string(),
            created_at: Some(created_at.to_string()),
            tags: category
                .map(|value| {
                    vec![Tag {
                        name: "category".to_string(),
                        value: Some(value.to_string()),
                    }]
                })
                .unwrap_or_default(),
            ..Job::default()
        }
    }

    fn scenario_jobs() -> Vec<Job> {
        vec![
            job(1, "Backend Engineer", "2024-01-10", Some("Engineering")),
            job(2, "Data Analyst", "2024-02-05", Some("Analytics")),
        ]
    }

    fn names(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.name.as_str()).collect()
    }

    fn ids(jobs: &[Job]) -> Vec<u64> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[test]
    fn sort_by_name_ascending() {
        let view = derive_view(
            &scenario_jobs(),
            "",
            &SortSpec::new(SortField::Name, SortDirection::Asc),
            &[],
        );
        assert_eq!(names(&view), vec!["Backend Engineer", "Data Analyst"]);
    }

    #[test]
    fn search_matches_name_ignoring_case() {
        let view = derive_view(&scenario_jobs(), "data", &SortSpec::default(), &[]);
        assert_eq!(names(&view), vec!["Data Analyst"]);
    }

    #[test]
    fn category_filter_matches_upper_cased_value() {
        let view = derive_view(
            &scenario_jobs(),
            "",
            &SortSpec::default(),
            &["ENGINEERING".to_string()],
        );
        assert_eq!(names(&view), vec!["Backend Engineer"]);
    }

    #[test]
    fn sort_by_creation_date_descending() {
        let view = derive_view(
            &scenario_jobs(),
            "",
            &SortSpec::new(SortField::CreatedAt, SortDirection::Desc),
            &[],
        );
        assert_eq!(names(&view), vec!["Data Analyst", "Backend Engineer"]);
    }

    #[test]
    fn unset_sort_keeps_fetch_order() {
        let jobs = vec![
            job(1, "Zeta", "2024-03-01", None),
            job(2, "Alpha", "2024-01-01", None),
        ];
        let view = derive_view(&jobs, "", &SortSpec::default(), &[]);
        assert_eq!(ids(&view), vec![1, 2]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let jobs = vec![
            job(1, "Engineer", "2024-01-01", Some("B")),
            job(2, "Analyst", "2024-01-01", Some("A")),
            job(3, "Designer", "2024-01-01", Some("B")),
            job(4, "Manager", "2024-01-01", Some("A")),
        ];
        let asc = derive_view(
            &jobs,
            "",
            &SortSpec::new(SortField::Category, SortDirection::Asc),
            &[],
        );
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);
        let desc = derive_view(
            &jobs,
            "",
            &SortSpec::new(SortField::Category, SortDirection::Desc),
            &[],
        );
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn missing_category_sorts_as_empty_and_is_filtered_out() {
        let jobs = vec![
            job(1, "Engineer", "2024-01-01", Some("Engineering")),
            job(2, "Untagged", "2024-01-01", None),
        ];
        let sorted = derive_view(
            &jobs,
            "",
            &SortSpec::new(SortField::Category, SortDirection::Asc),
            &[],
        );
        assert_eq!(ids(&sorted), vec![2, 1]);
        let filtered = derive_view(
            &jobs,
            "",
            &SortSpec::default(),
            &["ENGINEERING".to_string()],
        );
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn filters_and_sort_combine() {
        let jobs = vec![
            job(1, "Senior Engineer", "2024-01-01", Some("Engineering")),
            job(2, "Engineering Manager", "2024-03-01", Some("Management")),
            job(3, "Junior Engineer", "2024-02-01", Some("engineering")),
            job(4, "Data Analyst", "2024-04-01", Some("Engineering")),
        ];
        let view = derive_view(
            &jobs,
            "ENGINEER",
            &SortSpec::new(SortField::CreatedAt, SortDirection::Desc),
            &["ENGINEERING".to_string()],
        );
        assert_eq!(ids(&view), vec![3, 1]);
    }

    #[test]
    fn derive_view_is_pure_and_idempotent() {
        let jobs: Vec<Job> = (0..20).map(|_| Faker.fake::<Job>()).collect();
        let spec = SortSpec::new(SortField::Category, SortDirection::Desc);
        let first = derive_view(&jobs, "a", &spec, &[]);
        let second = derive_view(&jobs, "a", &spec, &[]);
        assert_eq!(first, second);
        assert_eq!(derive_view(&first, "a", &spec, &[]), first);
    }

    #[test]
    fn output_is_subset_of_input() {
        let jobs: Vec<Job> = (0..20).map(|_| Faker.fake::<Job>()).collect();
        let view = derive_view(
            &jobs,
            "e",
            &SortSpec::new(SortField::CreatedAt, SortDirection::Asc),
            &[],
        );
        assert!(view.len() <= jobs.len());
        for job in &view {
            assert!(jobs.contains(job));
            assert!(job.name.to_lowercase().contains('e'));
        }
    }

    #[test]
    fn jobs_without_tags_do_not_fail() {
        let jobs = vec![Job {
            id: 1,
            name: "Plain".to_string(),
            ..Job::default()
        }];
        let view = derive_view(
            &jobs,
            "",
            &SortSpec::new(SortField::Category, SortDirection::Asc),
            &[],
        );
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn move_row_reorders_within_bounds() {
        let mut view = scenario_jobs();
        assert!(move_row(&mut view, 0, 1));
        assert_eq!(names(&view), vec!["Data Analyst", "Backend Engineer"]);
        assert!(!move_row(&mut view, 0, 5));
        assert!(!move_row(&mut view, 1, 1));
    }
}
