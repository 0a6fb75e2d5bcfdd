use common::config::DashboardConfig;
use common::model::faculty::{Faculty, FacultyFilters};
use yew::prelude::*;

use crate::components::detail::text;
use crate::components::filter_bar::FilterControl;
use crate::components::list_table::TableRow;

const SUBJECT_FILTER: &str = "subjects";

/// Configured subjects first, then any other subject found on the roster.
pub fn subject_options<'a>(
    config: &DashboardConfig,
    extra: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let mut options = config.subjects.clone();
    for subject in extra {
        if !subject.is_empty() && !options.iter().any(|o| o == subject) {
            options.push(subject.to_string());
        }
    }
    options
}

impl TableRow for Faculty {
    const SEARCH_PLACEHOLDER: &'static str = "Search by Name";

    fn headers() -> &'static [&'static str] {
        &["Faculty ID", "Name", "Subject", "Email", "Mobile"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { <span class="mono">{ self.id.clone() }</span> },
            text(self.full_name()),
            text(self.subject.clone()),
            text(self.email.clone().unwrap_or_else(|| "-".to_string())),
            text(self.mobile.clone()),
        ]
    }

    fn filter_controls(
        source: &[Self],
        filters: &FacultyFilters,
        config: &DashboardConfig,
    ) -> Vec<FilterControl> {
        vec![FilterControl::Checklist {
            key: SUBJECT_FILTER,
            label: "Subjects",
            options: subject_options(config, source.iter().map(|f| f.subject.as_str())),
            selected: filters.subjects.iter().cloned().collect(),
        }]
    }

    fn set_filter(filters: &mut FacultyFilters, key: &str, value: String) {
        match key {
            SUBJECT_FILTER => filters.toggle_subject(&value),
            _ => log::warn!("unknown faculty filter {}", key),
        }
    }
}
