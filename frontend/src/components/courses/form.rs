use common::form::course::{schedule_options, CourseDraft};
use common::form::{FieldErrors, FormMode};
use yew::prelude::*;

use crate::components::form_dialog::fields::{parse_count, select_field, stepper_field, TextField};
use crate::components::form_dialog::{FieldLink, FormFields};

const STUDENT_NAMES_LIST: &str = "course-student-names";

impl FormFields for CourseDraft {
    fn title(mode: FormMode, _initial: Option<&Self>) -> String {
        match mode {
            FormMode::Create => "Create Course".to_string(),
            FormMode::Edit => "Edit Course".to_string(),
        }
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html {
        let on_students = link.input("students", |d, v| d.students = v);
        let schedules = schedule_options(&draft.schedule);

        html! {
            <>
                <h3 class="form-section">{"Course Details"}</h3>
                <div class="form-grid">
                    { TextField::new("Course Name", "name", &draft.name)
                        .required()
                        .placeholder("Enter course name")
                        .render(errors, link.input("name", |d, v| d.name = v)) }
                    { select_field(
                        "Schedule",
                        "schedule",
                        &draft.schedule,
                        schedules.as_slice(),
                        "Select days",
                        false,
                        errors,
                        link.select("schedule", |d, v| d.schedule = v),
                    ) }
                    { select_field(
                        "Assign Faculty (Optional)",
                        "faculty",
                        &draft.faculty,
                        link.options.faculty.as_slice(),
                        "Select faculty",
                        false,
                        errors,
                        link.select("faculty", |d, v| d.faculty = v),
                    ) }
                    <div class="form-field wide">
                        <label class="field-label">{"Assign Students (Optional)"}</label>
                        <input
                            class="input"
                            type="text"
                            list={STUDENT_NAMES_LIST}
                            placeholder="Head count or comma-separated names"
                            value={draft.students.clone()}
                            oninput={on_students}
                        />
                        <datalist id={STUDENT_NAMES_LIST}>
                            { for link.options.students.iter().map(|name| html! {
                                <option value={name.clone()} />
                            }) }
                        </datalist>
                    </div>
                </div>
                <h3 class="form-section">{"Class Duration"}</h3>
                <div class="form-grid time-range">
                    { TextField::new("Start Time", "start_time", &draft.start_time)
                        .kind("time")
                        .render(errors, link.input("start_time", |d, v| d.start_time = v)) }
                    <span class="range-separator">{"to"}</span>
                    { TextField::new("End Time", "end_time", &draft.end_time)
                        .kind("time")
                        .render(errors, link.input("end_time", |d, v| d.end_time = v)) }
                </div>
                { stepper_field(
                    "Total Class Hours",
                    "total_hours",
                    draft.total_hours,
                    errors,
                    link.input("total_hours", |d, v| d.total_hours = parse_count(&v)),
                    link.click("total_hours", |d| d.step_hours(false)),
                    link.click("total_hours", |d| d.step_hours(true)),
                ) }
            </>
        }
    }
}
