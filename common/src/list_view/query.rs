//! Derived view computation: free-text search AND-combined with the
//! per-entity filter dimensions.
//!
//! A row is kept when it matches the search query and every active filter
//! dimension. An empty query or an empty filter value places no constraint.
//! Output keeps source order.

use std::collections::BTreeSet;

/// A record that can be listed, searched and filtered by a list view.
pub trait ListRow: Clone + PartialEq {
    /// The filter dimensions this row type supports.
    type Filters: FilterSet<Self> + Default + Clone + PartialEq;

    /// Stable identifier used for row keys and the action menu.
    fn row_id(&self) -> &str;

    /// Fields the search box matches against, case-insensitively.
    fn search_fields(&self) -> Vec<&str>;
}

/// A set of filter dimensions over rows of type `R`.
pub trait FilterSet<R> {
    /// True when `row` satisfies every active dimension.
    fn matches(&self, row: &R) -> bool;

    /// True when no dimension holds a value.
    fn is_empty(&self) -> bool;

    fn clear(&mut self)
    where
        Self: Default + Sized,
    {
        *self = Self::default();
    }
}

/// Returns the filter value when it constrains anything.
///
/// `None` and `Some("")` both mean "no constraint", matching how an unset
/// `<select>` reports its value.
pub fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Case-insensitive substring match of `query` against the row's search fields.
pub fn matches_query<R: ListRow>(row: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_needle(row, &query.to_lowercase())
}

fn matches_needle<R: ListRow>(row: &R, needle: &str) -> bool {
    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Rows of `source` matching `query` and `filters`, in source order.
pub fn derived_view<'a, R: ListRow>(
    source: &'a [R],
    query: &str,
    filters: &R::Filters,
) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    source
        .iter()
        .filter(|row| needle.is_empty() || matches_needle(*row, &needle))
        .filter(|row| filters.matches(row))
        .collect()
}

/// Sorted, de-duplicated values pulled from `source`, for filter dropdowns.
pub fn distinct_values<R, F, I>(source: &[R], values: F) -> Vec<String>
where
    F: Fn(&R) -> I,
    I: IntoIterator<Item = String>,
{
    source
        .iter()
        .flat_map(values)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::{Course, CourseFilters};
    use crate::model::faculty::{Faculty, FacultyFilters};
    use crate::model::student::{Student, StudentFilters};
    use crate::seed;

    fn ids<R: ListRow>(rows: &[&R]) -> Vec<String> {
        rows.iter().map(|r| r.row_id().to_string()).collect()
    }

    #[test]
    fn empty_query_and_filters_return_source() {
        let courses = seed::courses();
        let view = derived_view(&courses, "", &CourseFilters::default());
        let expected: Vec<&Course> = courses.iter().collect();
        assert_eq!(view, expected);
    }

    #[test]
    fn chem_matches_both_chemistry_courses() {
        let courses = seed::courses();
        let view = derived_view(&courses, "chem", &CourseFilters::default());
        assert_eq!(ids(&view), vec!["CHE101", "CHE102"]);
    }

    #[test]
    fn query_is_case_insensitive_and_matches_id() {
        let courses = seed::courses();
        let view = derived_view(&courses, "his1", &CourseFilters::default());
        assert_eq!(ids(&view), vec!["HIS102"]);

        let upper = derived_view(&courses, "BIOLOGY", &CourseFilters::default());
        assert_eq!(ids(&upper), vec!["BIO101"]);
    }

    #[test]
    fn query_and_filters_combine_with_and() {
        let courses = seed::courses();
        let filters = CourseFilters {
            day: Some("Fri".to_string()),
            faculty: None,
        };
        let view = derived_view(&courses, "chem", &filters);
        assert_eq!(ids(&view), vec!["CHE101", "CHE102"]);

        let filters = CourseFilters {
            day: Some("Fri".to_string()),
            faculty: Some("Jessica Lee".to_string()),
        };
        let view = derived_view(&courses, "chem", &filters);
        assert_eq!(ids(&view), vec!["CHE102"]);
    }

    #[test]
    fn every_result_satisfies_every_active_predicate() {
        let students = seed::students();
        let queries = ["", "a", "example", "STU10", "zzz"];
        let grades = [None, Some(""), Some("10"), Some("11"), Some("13")];

        for query in queries {
            for grade in grades {
                let filters = StudentFilters {
                    grade: grade.map(str::to_string),
                };
                let view = derived_view(&students, query, &filters);
                for row in &view {
                    assert!(students.contains(row));
                    assert!(matches_query(*row, query));
                    assert!(filters.matches(row));
                }
                let expected = students
                    .iter()
                    .filter(|s| matches_query(*s, query) && filters.matches(s))
                    .count();
                assert_eq!(view.len(), expected);
            }
        }
    }

    #[test]
    fn empty_filter_value_places_no_constraint() {
        let students = seed::students();
        let filters = StudentFilters {
            grade: Some(String::new()),
        };
        assert!(filters.is_empty());
        assert_eq!(derived_view(&students, "", &filters).len(), students.len());
    }

    #[test]
    fn student_search_covers_email() {
        let students: Vec<Student> = seed::students();
        let view = derived_view(&students, "hippolyta", &StudentFilters::default());
        assert!(view.is_empty());

        let view = derived_view(&students, "diana.p@", &StudentFilters::default());
        assert_eq!(ids(&view), vec!["STU104"]);
    }

    #[test]
    fn faculty_subject_filter_is_any_of() {
        let faculty: Vec<Faculty> = seed::faculty();
        let mut filters = FacultyFilters::default();
        filters.toggle_subject("Physics");
        filters.toggle_subject("Biology");

        let view = derived_view(&faculty, "", &filters);
        assert!(!view.is_empty());
        assert!(
            view.iter()
                .all(|f| f.subject == "Physics" || f.subject == "Biology")
        );

        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let courses = seed::courses();
        let days = distinct_values(&courses, |c: &Course| {
            c.days().map(str::to_string).collect::<Vec<_>>()
        });
        assert_eq!(days, vec!["Fri", "Mon", "Thu", "Tue", "Wed"]);
    }
}
