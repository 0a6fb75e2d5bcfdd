use common::model::faculty::Faculty;
use yew::prelude::*;

use crate::components::detail::{back_button, detail_row};

pub struct FacultyDetailActions {
    pub on_back: Callback<()>,
    pub on_edit: Callback<String>,
    pub on_manage_availability: Callback<String>,
}

fn emit_id(callback: &Callback<String>, id: &str) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let id = id.to_string();
    Callback::from(move |_| callback.emit(id.clone()))
}

pub fn faculty_detail(faculty: &Faculty, actions: &FacultyDetailActions) -> Html {
    let optional = |value: &Option<String>| value.clone().unwrap_or_default();

    html! {
        <div class="detail-page">
            <div class="detail-header">
                { back_button(&actions.on_back) }
                <h1>{ faculty.full_name() }</h1>
                <span class="mono subtle">{ faculty.id.clone() }</span>
                <button class="btn-primary" onclick={emit_id(&actions.on_edit, &faculty.id)}>
                    <i class="material-icons">{"edit"}</i>
                    {"Edit"}
                </button>
            </div>
            <div class="card-grid">
                <div class="card">
                    <h2>{"Basic Details"}</h2>
                    { detail_row("First Name", &faculty.first_name) }
                    { detail_row("Last Name", &optional(&faculty.last_name)) }
                    { detail_row("Gender", &optional(&faculty.gender)) }
                    { detail_row("Date of Birth", &optional(&faculty.date_of_birth)) }
                    { detail_row("Email", &optional(&faculty.email)) }
                    { detail_row("Mobile Number", &faculty.mobile) }
                    { detail_row("Subject", &faculty.subject) }
                </div>
                <div class="card">
                    <div class="card-header">
                        <h2>{"Availability"}</h2>
                        <button
                            class="btn-outline"
                            onclick={emit_id(&actions.on_manage_availability, &faculty.id)}
                        >
                            {"Manage Availability"}
                        </button>
                    </div>
                    if faculty.availability.is_empty() {
                        <p class="subtle">{"No availability set."}</p>
                    } else {
                        <ul class="availability-list">
                            { for faculty.availability.iter().map(|slot| html! {
                                <li>
                                    <span class="days">{ slot.days.join(", ") }</span>
                                    <span class="time">{ format!("{} - {}", slot.start_time, slot.end_time) }</span>
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}
