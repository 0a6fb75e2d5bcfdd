//! Field layouts for the student dialog and the enrolled-course dialog.

use common::form::course::schedule_options;
use common::form::enrollment::EnrolledCourseDraft;
use common::form::student::StudentDraft;
use common::form::{FieldErrors, FormMode};
use yew::prelude::*;

use crate::components::form_dialog::fields::{parse_count, select_field, stepper_field, TextField};
use crate::components::form_dialog::{FieldLink, FormFields};

impl FormFields for StudentDraft {
    fn title(mode: FormMode, initial: Option<&Self>) -> String {
        match (mode, initial) {
            (FormMode::Edit, Some(student)) => format!("Edit Student: {}", student.name),
            (FormMode::Edit, None) => "Edit Student".to_string(),
            (FormMode::Create, _) => "Add Student".to_string(),
        }
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html {
        html! {
            <>
                <h3 class="form-section">{"Basic Details"}</h3>
                <div class="form-grid">
                    { TextField::new("Name", "name", &draft.name)
                        .required()
                        .placeholder("Enter student name")
                        .render(errors, link.input("name", |d, v| d.name = v)) }
                    { TextField::new("Grade", "grade", &draft.grade)
                        .render(errors, link.input("grade", |d, v| d.grade = v)) }
                    { TextField::new("Date of Birth", "date_of_birth", &draft.date_of_birth)
                        .kind("date")
                        .render(errors, link.input("date_of_birth", |d, v| d.date_of_birth = v)) }
                    { TextField::new("Email", "email", &draft.email)
                        .kind("email")
                        .render(errors, link.input("email", |d, v| d.email = v)) }
                    { TextField::new("Mobile Number", "mobile", &draft.mobile)
                        .kind("tel")
                        .render(errors, link.input("mobile", |d, v| d.mobile = v)) }
                </div>
                <h3 class="form-section">{"Parent/Guardian"}</h3>
                <div class="form-grid">
                    { TextField::new("Parent Name", "parent_name", &draft.parent_name)
                        .render(errors, link.input("parent_name", |d, v| d.parent_name = v)) }
                    { TextField::new("Parent Email", "parent_email", &draft.parent_email)
                        .kind("email")
                        .render(errors, link.input("parent_email", |d, v| d.parent_email = v)) }
                    { TextField::new("Parent Mobile", "parent_mobile", &draft.parent_mobile)
                        .kind("tel")
                        .render(errors, link.input("parent_mobile", |d, v| d.parent_mobile = v)) }
                </div>
            </>
        }
    }
}

/// Splits `"HH:MM-HH:MM"` without validating, so a half-entered slot
/// survives while the other end is still being typed.
fn slot_ends(slot: &str) -> (String, String) {
    match slot.split_once('-') {
        Some((start, end)) => (start.to_string(), end.to_string()),
        None => (slot.to_string(), String::new()),
    }
}

impl FormFields for EnrolledCourseDraft {
    fn title(_mode: FormMode, initial: Option<&Self>) -> String {
        match initial {
            Some(row) => format!("Edit Course: {}", row.course.id),
            None => "Edit Course".to_string(),
        }
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html {
        let course = &draft.course;
        let (start, end) = slot_ends(&course.time_slot);
        let completed = course.completed.to_string();
        let schedules = schedule_options(&course.schedule);

        html! {
            <>
                <div class="form-grid">
                    { TextField::new("Course Name", "name", &course.name)
                        .required()
                        .render(errors, link.input("name", |d, v| d.course.name = v)) }
                    { select_field(
                        "Schedule",
                        "schedule",
                        &course.schedule,
                        schedules.as_slice(),
                        "Select days",
                        false,
                        errors,
                        link.select("schedule", |d, v| d.course.schedule = v),
                    ) }
                    { select_field(
                        "Assigned Faculty (Optional)",
                        "faculty",
                        &course.faculty,
                        link.options.faculty.as_slice(),
                        "Select faculty",
                        false,
                        errors,
                        link.select("faculty", |d, v| d.course.faculty = v),
                    ) }
                </div>
                <div class="form-grid time-range">
                    { TextField::new("Start Time", "time_slot", &start)
                        .kind("time")
                        .render(errors, link.input("time_slot", |d, v| {
                            let (_, end) = slot_ends(&d.course.time_slot);
                            d.course.time_slot = format!("{}-{}", v, end);
                        })) }
                    <span class="range-separator">{"to"}</span>
                    { TextField::new("End Time", "time_slot", &end)
                        .kind("time")
                        .render(errors, link.input("time_slot", |d, v| {
                            let (start, _) = slot_ends(&d.course.time_slot);
                            d.course.time_slot = format!("{}-{}", start, v);
                        })) }
                </div>
                <div class="form-grid">
                    { stepper_field(
                        "Total Class Hours",
                        "planned",
                        course.planned,
                        errors,
                        link.input("planned", |d, v| d.course.planned = parse_count(&v)),
                        link.click("planned", |d| d.step_planned(false)),
                        link.click("planned", |d| d.step_planned(true)),
                    ) }
                    { TextField::new("Completed Classes", "completed", &completed)
                        .kind("number")
                        .render(errors, link.input("completed", |d, v| d.course.completed = parse_count(&v))) }
                </div>
            </>
        }
    }
}
