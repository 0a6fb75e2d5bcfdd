use super::{Draft, FieldErrors};
use crate::model::course::{Course, CoursePatch, CourseStudents, NewCourse, TimeSlot};

/// Day groupings offered by the course schedule select.
pub const SCHEDULE_OPTIONS: [&str; 5] = [
    "Mon, Wed, Fri",
    "Tue, Thu",
    "Mon, Tue, Wed",
    "Wed, Fri",
    "Mon, Thu",
];

/// The schedule choices, plus `current` when it is not one of them.
pub fn schedule_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = SCHEDULE_OPTIONS.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !SCHEDULE_OPTIONS.contains(&current) {
        options.push(current.to_string());
    }
    options
}

/// Create/edit course form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub name: String,
    pub schedule: String,
    pub faculty: String,
    /// Head count or comma-separated names, see [`CourseStudents::parse`].
    pub students: String,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: u32,
    /// Hours already taught. Zero when creating.
    pub completed: u32,
}

impl Draft for CourseDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Course name is required");
        if self.total_hours == 0 {
            errors.insert("total_hours", "Total class hours must be greater than 0");
        } else if self.total_hours < self.completed {
            errors.insert(
                "total_hours",
                format!(
                    "Total class hours cannot be less than completed hours ({})",
                    self.completed
                ),
            );
        }
        if self.start_time.is_empty() != self.end_time.is_empty() {
            errors.insert("end_time", "Enter both a start and end time");
        }
        errors
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        let slot = TimeSlot::parse(&course.time_slot).unwrap_or_default();
        CourseDraft {
            name: course.name.clone(),
            schedule: course.schedule.clone(),
            faculty: course.faculty.clone(),
            students: course.students.to_string(),
            start_time: slot.start,
            end_time: slot.end,
            total_hours: course.planned,
            completed: course.completed,
        }
    }
}

impl CourseDraft {
    /// Hours stepper. Never goes below 1.
    pub fn step_hours(&mut self, increment: bool) {
        self.total_hours = if increment {
            self.total_hours.saturating_add(1)
        } else {
            self.total_hours.saturating_sub(1).max(1)
        };
    }

    /// `"HH:MM-HH:MM"`, or empty while either end is unset.
    pub fn time_slot(&self) -> String {
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return String::new();
        }
        TimeSlot {
            start: self.start_time.clone(),
            end: self.end_time.clone(),
        }
        .to_string()
    }

    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            time_slot: self.time_slot(),
            students: CourseStudents::parse(&self.students),
            name: self.name,
            schedule: self.schedule,
            faculty: self.faculty,
            planned: self.total_hours,
        }
    }

    /// Both time ends empty leaves the stored slot untouched.
    pub fn into_patch(self) -> CoursePatch {
        let time_slot = if self.start_time.is_empty() && self.end_time.is_empty() {
            None
        } else {
            Some(self.time_slot())
        };
        CoursePatch {
            time_slot,
            students: Some(CourseStudents::parse(&self.students)),
            name: Some(self.name),
            schedule: Some(self.schedule),
            faculty: Some(self.faculty),
            planned: Some(self.total_hours),
            completed: None,
        }
    }
}
