//! Editing one of a student's enrolled courses. The form edits the row
//! itself, so the draft is the `EnrolledCourse`.

use super::{Draft, FieldErrors};
use crate::model::course::{CoursePatch, EnrolledCourse, TimeSlot};

pub type EnrolledCourseDraft = EnrolledCourse;

impl Draft for EnrolledCourse {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.course.name, "Course name is required");
        if !self.has_blank_time_slot() && TimeSlot::parse(&self.course.time_slot).is_none() {
            errors.insert("time_slot", "Enter both a start and end time");
        }
        if self.course.planned == 0 {
            errors.insert("planned", "Total class hours must be greater than 0");
        }
        if self.course.completed > self.course.planned {
            errors.insert(
                "completed",
                "Completed hours cannot exceed total class hours",
            );
        }
        errors
    }
}

impl EnrolledCourse {
    /// No slot at all, or both ends cleared in the form.
    fn has_blank_time_slot(&self) -> bool {
        matches!(self.course.time_slot.trim(), "" | "-")
    }

    /// Planned-hours stepper. Never goes below 1.
    pub fn step_planned(&mut self, increment: bool) {
        let planned = &mut self.course.planned;
        *planned = if increment {
            planned.saturating_add(1)
        } else {
            planned.saturating_sub(1).max(1)
        };
    }

    /// The course-level fields this form can change.
    pub fn to_patch(&self) -> CoursePatch {
        CoursePatch {
            name: Some(self.course.name.clone()),
            schedule: Some(self.course.schedule.clone()),
            time_slot: Some(
                TimeSlot::parse(&self.course.time_slot)
                    .map(|slot| slot.to_string())
                    .unwrap_or_default(),
            ),
            faculty: Some(self.course.faculty.clone()),
            planned: Some(self.course.planned),
            completed: Some(self.course.completed),
            students: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn enrolled(id: &str) -> EnrolledCourseDraft {
        let student = seed::students()[0].clone();
        student
            .enrolled_courses(&seed::courses(), &seed::enrollment_dates())
            .into_iter()
            .find(|e| e.course.id == id)
            .unwrap()
    }

    #[test]
    fn seeded_enrolment_is_valid() {
        assert!(enrolled("MAT101").validate().is_empty());
    }

    #[test]
    fn completed_may_not_exceed_planned() {
        let mut draft = enrolled("MAT101");
        draft.course.completed = 26;
        assert!(draft.validate().get("completed").is_some());
        draft.step_planned(true);
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn planned_stepper_floors_at_one() {
        let mut draft = enrolled("BIO101");
        draft.course.planned = 1;
        draft.course.completed = 0;
        draft.step_planned(false);
        assert_eq!(draft.course.planned, 1);
    }

    #[test]
    fn half_entered_time_slot_is_rejected() {
        let mut row = enrolled("CHE101");
        row.course.time_slot = "13:00-".to_string();
        assert_eq!(
            row.validate().get("time_slot"),
            Some("Enter both a start and end time")
        );
        row.course.time_slot = "-15:00".to_string();
        assert!(row.validate().get("time_slot").is_some());
    }

    #[test]
    fn cleared_time_slot_is_stored_empty() {
        let mut row = enrolled("CHE101");
        row.course.time_slot = "-".to_string();
        assert!(row.validate().is_empty());
        assert_eq!(row.to_patch().time_slot, Some(String::new()));
    }

    #[test]
    fn time_slot_survives_enrolled_edit_then_course_rename() {
        let mut course = seed::courses()
            .into_iter()
            .find(|c| c.id == "CHE101")
            .unwrap();
        let mut row = enrolled("CHE101");
        row.course.time_slot = "14:00-16:00".to_string();
        assert!(row.validate().is_empty());
        crate::repository::Entity::apply(&mut course, row.to_patch());
        assert_eq!(course.time_slot, "14:00-16:00");

        let mut draft = crate::form::course::CourseDraft::from(&course);
        draft.name = "General Chemistry".to_string();
        assert!(draft.validate().is_empty());
        crate::repository::Entity::apply(&mut course, draft.into_patch());
        assert_eq!(course.name, "General Chemistry");
        assert_eq!(course.time_slot, "14:00-16:00");
    }
}
