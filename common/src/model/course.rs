use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::list_view::query::{FilterSet, ListRow, active};
use crate::repository::Entity;

/// A scheduled course as shown in the courses table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Comma-joined day list, e.g. `"Mon, Wed, Fri"`.
    pub schedule: String,
    /// `"HH:MM-HH:MM"`.
    pub time_slot: String,
    /// Display name of the assigned faculty member.
    pub faculty: String,
    pub students: CourseStudents,
    pub planned: u32,
    pub completed: u32,
}

/// Assigned students: some screens track a head count, others a name list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseStudents {
    Count(u32),
    Names(Vec<String>),
}

impl Default for CourseStudents {
    fn default() -> Self {
        CourseStudents::Count(0)
    }
}

impl CourseStudents {
    /// Parses form input: a bare number is a head count, anything else is a
    /// comma-separated name list.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CourseStudents::Count(0);
        }
        match trimmed.parse::<u32>() {
            Ok(count) => CourseStudents::Count(count),
            Err(_) => CourseStudents::Names(
                trimmed
                    .split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            CourseStudents::Count(n) => *n as usize,
            CourseStudents::Names(names) => names.len(),
        }
    }
}

impl fmt::Display for CourseStudents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseStudents::Count(n) => write!(f, "{}", n),
            CourseStudents::Names(names) => write!(f, "{}", names.join(", ")),
        }
    }
}

impl Course {
    /// Days of the schedule, trimmed, in schedule order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.schedule
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// `"{completed}/{planned}"` as rendered in the progress column.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.completed, self.planned)
    }
}

/// Start and end of a course time slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

static TIME_SLOT_RE: OnceLock<Regex> = OnceLock::new();

fn time_slot_pattern() -> &'static Regex {
    TIME_SLOT_RE.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*$")
            .expect("Invalid time slot regex")
    })
}

impl TimeSlot {
    /// Parses `"08:00-10:00"`. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = time_slot_pattern().captures(input)?;
        Some(TimeSlot {
            start: caps.get(1)?.as_str().to_string(),
            end: caps.get(2)?.as_str().to_string(),
        })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A course as seen from a student's enrolment, with its enrolment date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    #[serde(flatten)]
    pub course: Course,
    pub enrolled_on: String,
}

/// Filter dimensions shared by the courses and enrolled-courses tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilters {
    /// A single weekday token, e.g. `"Mon"`.
    pub day: Option<String>,
    /// Exact faculty display name.
    pub faculty: Option<String>,
}

impl FilterSet<Course> for CourseFilters {
    fn matches(&self, course: &Course) -> bool {
        active(&self.day).is_none_or(|day| course.days().any(|d| d == day))
            && active(&self.faculty).is_none_or(|faculty| course.faculty == faculty)
    }

    fn is_empty(&self) -> bool {
        active(&self.day).is_none() && active(&self.faculty).is_none()
    }
}

impl FilterSet<EnrolledCourse> for CourseFilters {
    fn matches(&self, row: &EnrolledCourse) -> bool {
        <Self as FilterSet<Course>>::matches(self, &row.course)
    }

    fn is_empty(&self) -> bool {
        <Self as FilterSet<Course>>::is_empty(self)
    }
}

impl ListRow for Course {
    type Filters = CourseFilters;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }
}

impl ListRow for EnrolledCourse {
    type Filters = CourseFilters;

    fn row_id(&self) -> &str {
        &self.course.id
    }

    fn search_fields(&self) -> Vec<&str> {
        self.course.search_fields()
    }
}

/// Fields for a course that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCourse {
    pub name: String,
    pub schedule: String,
    pub time_slot: String,
    pub faculty: String,
    pub students: CourseStudents,
    pub planned: u32,
}

/// Partial update; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub schedule: Option<String>,
    pub time_slot: Option<String>,
    pub faculty: Option<String>,
    pub students: Option<CourseStudents>,
    pub planned: Option<u32>,
    pub completed: Option<u32>,
}

impl Entity for Course {
    const KIND: &'static str = "course";
    const ID_PREFIX: &'static str = "CRS";
    type New = NewCourse;
    type Patch = CoursePatch;

    fn with_id(new: NewCourse, id: String) -> Self {
        Course {
            id,
            name: new.name,
            schedule: new.schedule,
            time_slot: new.time_slot,
            faculty: new.faculty,
            students: new.students,
            planned: new.planned,
            completed: 0,
        }
    }

    fn apply(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        if let Some(time_slot) = patch.time_slot {
            self.time_slot = time_slot;
        }
        if let Some(faculty) = patch.faculty {
            self.faculty = faculty;
        }
        if let Some(students) = patch.students {
            self.students = students;
        }
        if let Some(planned) = patch.planned {
            self.planned = planned;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slot_parses_and_formats() {
        let slot = TimeSlot::parse("08:00-10:00").unwrap();
        assert_eq!(slot.start, "08:00");
        assert_eq!(slot.end, "10:00");
        assert_eq!(slot.to_string(), "08:00-10:00");

        assert_eq!(
            TimeSlot::parse(" 9:30 - 11:00 "),
            Some(TimeSlot {
                start: "9:30".to_string(),
                end: "11:00".to_string()
            })
        );
        assert!(TimeSlot::parse("morning").is_none());
        assert!(TimeSlot::parse("").is_none());
        assert!(TimeSlot::parse("13:00-").is_none());
        assert!(TimeSlot::parse("-15:00").is_none());
    }

    #[test]
    fn students_parse_count_or_names() {
        assert_eq!(CourseStudents::parse("3"), CourseStudents::Count(3));
        assert_eq!(CourseStudents::parse("  "), CourseStudents::Count(0));
        let names = CourseStudents::parse("Bob Jinks, Alexis Fernandiz");
        assert_eq!(names.count(), 2);
        assert_eq!(names.to_string(), "Bob Jinks, Alexis Fernandiz");
    }

    #[test]
    fn students_deserialize_from_either_shape() {
        let count: CourseStudents = serde_json::from_str("2").unwrap();
        assert_eq!(count, CourseStudents::Count(2));
        let names: CourseStudents = serde_json::from_str(r#"["Jane Smith"]"#).unwrap();
        assert_eq!(names, CourseStudents::Names(vec!["Jane Smith".to_string()]));
    }

    #[test]
    fn day_filter_matches_whole_tokens() {
        let course = Course {
            schedule: "Mon, Thu".to_string(),
            ..Course::default()
        };
        let filters = CourseFilters {
            day: Some("Thu".to_string()),
            faculty: None,
        };
        assert!(FilterSet::<Course>::matches(&filters, &course));

        let filters = CourseFilters {
            day: Some("Th".to_string()),
            faculty: None,
        };
        assert!(!FilterSet::<Course>::matches(&filters, &course));
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut course = Course {
            id: "MAT101".to_string(),
            name: "Mathematics".to_string(),
            planned: 25,
            completed: 12,
            ..Course::default()
        };
        course.apply(CoursePatch {
            planned: Some(30),
            ..CoursePatch::default()
        });
        assert_eq!(course.name, "Mathematics");
        assert_eq!(course.planned, 30);
        assert_eq!(course.completed, 12);
    }
}
