use common::form::faculty::{
    AvailabilityDraft, FacultyDraft, NO_VALID_SLOT_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
use common::form::{FieldErrors, FormMode};
use common::model::faculty::{DAY_OPTIONS, GENDER_OPTIONS};
use yew::prelude::*;

use super::table::subject_options;
use crate::components::form_dialog::fields::{field_error, select_field, TextField};
use crate::components::form_dialog::{FieldLink, FormFields};

impl FormFields for FacultyDraft {
    const INVALID_TOAST: Option<&'static str> = Some(REQUIRED_FIELDS_MESSAGE);

    fn title(mode: FormMode, _initial: Option<&Self>) -> String {
        match mode {
            FormMode::Create => "Create Faculty".to_string(),
            FormMode::Edit => "Edit Faculty".to_string(),
        }
    }

    fn submit_label(mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => "Create Faculty",
            FormMode::Edit => "Save Changes",
        }
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html {
        let subjects = subject_options(&link.config, std::iter::once(draft.subject.as_str()));

        html! {
            <div class="form-grid">
                { TextField::new("First Name", "first_name", &draft.first_name)
                    .required()
                    .render(errors, link.input("first_name", |d, v| d.first_name = v)) }
                { TextField::new("Last Name", "last_name", &draft.last_name)
                    .render(errors, link.input("last_name", |d, v| d.last_name = v)) }
                { select_field(
                    "Gender",
                    "gender",
                    &draft.gender,
                    GENDER_OPTIONS.as_slice(),
                    "Select gender",
                    false,
                    errors,
                    link.select("gender", |d, v| d.gender = v),
                ) }
                { TextField::new("Date of Birth", "date_of_birth", &draft.date_of_birth)
                    .kind("date")
                    .render(errors, link.input("date_of_birth", |d, v| d.date_of_birth = v)) }
                { TextField::new("Email", "email", &draft.email)
                    .kind("email")
                    .render(errors, link.input("email", |d, v| d.email = v)) }
                { TextField::new("Mobile Number", "mobile", &draft.mobile)
                    .kind("tel")
                    .required()
                    .render(errors, link.input("mobile", |d, v| d.mobile = v)) }
                { select_field(
                    "Subject",
                    "subject",
                    &draft.subject,
                    subjects.as_slice(),
                    "Select subject",
                    true,
                    errors,
                    link.select("subject", |d, v| d.subject = v),
                ) }
            </div>
        }
    }
}

impl FormFields for AvailabilityDraft {
    const INVALID_TOAST: Option<&'static str> = Some(NO_VALID_SLOT_MESSAGE);

    fn title(_mode: FormMode, _initial: Option<&Self>) -> String {
        "Manage Availability".to_string()
    }

    fn submit_label(_mode: FormMode) -> &'static str {
        "Save Availability"
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html {
        html! {
            <>
                { for draft.slots.iter().enumerate().map(|(index, slot)| {
                    html! {
                        <div class="availability-slot" key={index.to_string()}>
                            <div class="day-toggles">
                                { for DAY_OPTIONS.iter().map(|day| {
                                    let day: &'static str = *day;
                                    let on = slot.days.iter().any(|d| d == day);
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("day-chip", on.then_some("active"))}
                                            onclick={link.click("slots", move |d| {
                                                if let Some(slot) = d.slots.get_mut(index) {
                                                    slot.toggle_day(day);
                                                }
                                            })}
                                        >
                                            { day }
                                        </button>
                                    }
                                }) }
                            </div>
                            <div class="time-range">
                                <input
                                    class="input"
                                    type="time"
                                    value={slot.start_time.clone()}
                                    oninput={link.input("slots", move |d, v| {
                                        if let Some(slot) = d.slots.get_mut(index) {
                                            slot.start_time = v;
                                        }
                                    })}
                                />
                                <span class="range-separator">{"to"}</span>
                                <input
                                    class="input"
                                    type="time"
                                    value={slot.end_time.clone()}
                                    oninput={link.input("slots", move |d, v| {
                                        if let Some(slot) = d.slots.get_mut(index) {
                                            slot.end_time = v;
                                        }
                                    })}
                                />
                                <button
                                    type="button"
                                    class="icon-btn"
                                    title="Remove slot"
                                    onclick={link.click("slots", move |d| d.remove_slot(index))}
                                >
                                    <i class="material-icons">{"delete"}</i>
                                </button>
                            </div>
                        </div>
                    }
                }) }
                <button type="button" class="btn-text" onclick={link.click("slots", |d| d.add_slot())}>
                    <i class="material-icons">{"add"}</i>
                    {"Add Slot"}
                </button>
                { field_error(errors, "slots") }
            </>
        }
    }
}
