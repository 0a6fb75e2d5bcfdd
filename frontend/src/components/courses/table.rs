use common::config::DashboardConfig;
use common::list_view::query::distinct_values;
use common::model::course::{Course, CourseFilters, EnrolledCourse};
use common::model::faculty::DAY_OPTIONS;
use yew::prelude::*;

use crate::components::detail::text;
use crate::components::filter_bar::FilterControl;
use crate::components::list_table::TableRow;

pub const DAY_FILTER: &str = "day";
pub const FACULTY_FILTER: &str = "faculty";

/// Day and faculty selects, shared by the courses and enrolled-courses tables.
pub fn course_filter_controls<'a>(
    courses: impl Iterator<Item = &'a Course>,
    filters: &CourseFilters,
) -> Vec<FilterControl> {
    let courses: Vec<&Course> = courses.collect();
    vec![
        FilterControl::Select {
            key: DAY_FILTER,
            label: "Days",
            options: DAY_OPTIONS.iter().map(|d| d.to_string()).collect(),
            selected: filters.day.clone(),
        },
        FilterControl::Select {
            key: FACULTY_FILTER,
            label: "Faculty",
            options: distinct_values(&courses, |c| Some(c.faculty.clone())),
            selected: filters.faculty.clone(),
        },
    ]
}

pub fn set_course_filter(filters: &mut CourseFilters, key: &str, value: String) {
    let value = (!value.is_empty()).then_some(value);
    match key {
        DAY_FILTER => filters.day = value,
        FACULTY_FILTER => filters.faculty = value,
        _ => log::warn!("unknown course filter {}", key),
    }
}

impl TableRow for Course {
    const SEARCH_PLACEHOLDER: &'static str = "Search by Name or ID";

    fn headers() -> &'static [&'static str] {
        &[
            "Course ID",
            "Course Name",
            "Schedule",
            "Time Slot",
            "Assigned Faculty",
            "Assigned Students",
            "Classes Completed/Planned",
        ]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { <span class="mono">{ self.id.clone() }</span> },
            text(self.name.clone()),
            text(self.schedule.clone()),
            text(self.time_slot.clone()),
            text(self.faculty.clone()),
            text(self.students.count().to_string()),
            text(self.progress_label()),
        ]
    }

    fn filter_controls(
        source: &[Self],
        filters: &CourseFilters,
        _config: &DashboardConfig,
    ) -> Vec<FilterControl> {
        course_filter_controls(source.iter(), filters)
    }

    fn set_filter(filters: &mut CourseFilters, key: &str, value: String) {
        set_course_filter(filters, key, value);
    }
}

impl TableRow for EnrolledCourse {
    const SEARCH_PLACEHOLDER: &'static str = "Search by Name or ID";

    fn headers() -> &'static [&'static str] {
        &[
            "Course ID",
            "Course Name",
            "Schedule",
            "Time Slot",
            "Assigned Faculty",
            "Classes Completed/Planned",
        ]
    }

    fn cells(&self) -> Vec<Html> {
        let course = &self.course;
        vec![
            html! { <span class="mono">{ course.id.clone() }</span> },
            text(course.name.clone()),
            text(course.schedule.clone()),
            text(course.time_slot.clone()),
            text(course.faculty.clone()),
            text(course.progress_label()),
        ]
    }

    fn filter_controls(
        source: &[Self],
        filters: &CourseFilters,
        _config: &DashboardConfig,
    ) -> Vec<FilterControl> {
        course_filter_controls(source.iter().map(|row| &row.course), filters)
    }

    fn set_filter(filters: &mut CourseFilters, key: &str, value: String) {
        set_course_filter(filters, key, value);
    }
}

