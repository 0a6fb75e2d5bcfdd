use common::config::DashboardConfig;
use common::list_view::query::distinct_values;
use common::model::student::{Student, StudentFilters};
use yew::prelude::*;

use crate::components::detail::text;
use crate::components::filter_bar::FilterControl;
use crate::components::list_table::TableRow;

const GRADE_FILTER: &str = "grade";

impl TableRow for Student {
    const SEARCH_PLACEHOLDER: &'static str = "Search by Name, ID, Email";

    fn headers() -> &'static [&'static str] {
        &[
            "Student ID",
            "Name",
            "Grade",
            "Email",
            "Mobile Number",
            "Parent Name",
            "Parent Mobile",
        ]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { <span class="mono">{ self.id.clone() }</span> },
            text(self.name.clone()),
            text(self.grade.clone()),
            text(self.email.clone()),
            text(self.mobile.clone()),
            text(self.parent_name.clone()),
            text(self.parent_mobile.clone()),
        ]
    }

    fn filter_controls(
        source: &[Self],
        filters: &StudentFilters,
        _config: &DashboardConfig,
    ) -> Vec<FilterControl> {
        vec![FilterControl::Select {
            key: GRADE_FILTER,
            label: "Grades",
            options: distinct_values(source, |s| Some(s.grade.clone())),
            selected: filters.grade.clone(),
        }]
    }

    fn set_filter(filters: &mut StudentFilters, key: &str, value: String) {
        match key {
            GRADE_FILTER => filters.grade = (!value.is_empty()).then_some(value),
            _ => log::warn!("unknown student filter {}", key),
        }
    }
}
