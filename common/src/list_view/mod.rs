//! List view engine shared by every table in the dashboard.
//!
//! `ListViewState<R>` owns the search query, the filter dimensions, the
//! pagination and the row menu for one table of `R`. The rows themselves
//! stay with the caller: `view()` borrows the source slice and returns the
//! page to render.

pub mod pagination;
pub mod query;
pub mod row_menu;

use log::debug;

use pagination::{PageNav, PageResetPolicy, PageWindow, Pagination};
use query::{FilterSet, ListRow, derived_view};
use row_menu::RowMenuState;

/// The rows of the current page plus where that page sits in the result.
#[derive(Debug)]
pub struct DerivedView<'a, R> {
    pub rows: Vec<&'a R>,
    pub window: PageWindow,
}

pub struct ListViewState<R: ListRow> {
    query: String,
    filters: R::Filters,
    pagination: Pagination,
    reset_policy: PageResetPolicy,
    menu: RowMenuState,
}

impl<R: ListRow> ListViewState<R> {
    pub fn new(page_size: usize, reset_policy: PageResetPolicy) -> Self {
        Self {
            query: String::new(),
            filters: R::Filters::default(),
            pagination: Pagination::new(page_size),
            reset_policy,
            menu: RowMenuState::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &R::Filters {
        &self.filters
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn menu(&self) -> &RowMenuState {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut RowMenuState {
        &mut self.menu
    }

    /// True when the query or any filter dimension is active.
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.filters.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.after_criteria_change();
    }

    pub fn update_filters(&mut self, update: impl FnOnce(&mut R::Filters)) {
        update(&mut self.filters);
        self.after_criteria_change();
    }

    /// Clears the query and every filter dimension.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.filters.clear();
        self.after_criteria_change();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Page navigation against the currently matching row count.
    pub fn navigate(&mut self, nav: PageNav, source: &[R]) {
        let total = self.matching(source).len();
        self.pagination.navigate(nav, total);
    }

    /// Every row matching the current query and filters.
    pub fn matching<'a>(&self, source: &'a [R]) -> Vec<&'a R> {
        derived_view(source, &self.query, &self.filters)
    }

    /// The current page of matching rows.
    pub fn view<'a>(&self, source: &'a [R]) -> DerivedView<'a, R> {
        let mut rows = self.matching(source);
        let window = self.pagination.window(rows.len());
        rows.truncate(window.end);
        rows.drain(..window.start);
        DerivedView { rows, window }
    }

    fn after_criteria_change(&mut self) {
        if self.reset_policy == PageResetPolicy::ResetOnFilterChange {
            self.pagination.reset();
        }
        debug!(
            "list criteria changed: query={:?} filtered={}",
            self.query,
            !self.filters.is_empty()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Course;
    use crate::model::faculty::Faculty;
    use crate::seed;

    fn ids<R: ListRow>(view: &DerivedView<'_, R>) -> Vec<String> {
        view.rows.iter().map(|r| r.row_id().to_string()).collect()
    }

    #[test]
    fn view_returns_current_page_in_source_order() {
        let courses = seed::courses();
        let mut state: ListViewState<Course> = ListViewState::new(3, PageResetPolicy::KeepPage);

        let first = state.view(&courses);
        assert_eq!(ids(&first), vec!["MAT101", "BIO101", "CHE101"]);
        assert_eq!(first.window.label(), "1 - 3 of 7");

        state.navigate(PageNav::Last, &courses);
        let last = state.view(&courses);
        assert_eq!(ids(&last), vec!["HIS102"]);
        assert!(!last.window.has_next());
    }

    #[test]
    fn reset_policy_returns_to_first_page_on_query_change() {
        let faculty = seed::faculty();
        let mut state: ListViewState<Faculty> =
            ListViewState::new(2, PageResetPolicy::ResetOnFilterChange);
        state.navigate(PageNav::Next, &faculty);
        assert_eq!(state.pagination().page(), 2);

        state.set_query("a");
        assert_eq!(state.pagination().page(), 1);

        state.navigate(PageNav::Next, &faculty);
        state.update_filters(|f| f.toggle_subject("Physics"));
        assert_eq!(state.pagination().page(), 1);
    }

    #[test]
    fn keep_policy_holds_page_and_view_clamps_it() {
        let courses = seed::courses();
        let mut state: ListViewState<Course> = ListViewState::new(3, PageResetPolicy::KeepPage);
        state.navigate(PageNav::Last, &courses);
        assert_eq!(state.pagination().page(), 3);

        state.set_query("chem");
        assert_eq!(state.pagination().page(), 3);

        let view = state.view(&courses);
        assert_eq!(view.window.page, 1);
        assert_eq!(ids(&view), vec!["CHE101", "CHE102"]);
    }

    #[test]
    fn clear_filters_restores_full_list() {
        let courses = seed::courses();
        let mut state: ListViewState<Course> = ListViewState::new(7, PageResetPolicy::KeepPage);
        state.set_query("chem");
        state.update_filters(|f| f.day = Some("Mon".to_string()));
        assert!(state.is_filtered());

        state.clear_filters();
        assert!(!state.is_filtered());
        assert_eq!(state.query(), "");
        assert_eq!(state.view(&courses).rows.len(), 7);
    }

    #[test]
    fn no_match_yields_empty_page() {
        let courses = seed::courses();
        let mut state: ListViewState<Course> = ListViewState::new(7, PageResetPolicy::KeepPage);
        state.set_query("astronomy");
        let view = state.view(&courses);
        assert!(view.rows.is_empty());
        assert_eq!(view.window.label(), "0 - 0 of 0");
    }
}
