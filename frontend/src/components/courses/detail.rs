use common::model::course::Course;
use yew::prelude::*;

use crate::components::detail::{back_button, detail_row};

pub fn course_detail(course: &Course, on_back: &Callback<()>, on_edit: &Callback<String>) -> Html {
    let percent = if course.planned == 0 {
        0
    } else {
        (course.completed.min(course.planned) * 100 / course.planned) as usize
    };
    let on_edit = {
        let on_edit = on_edit.clone();
        let id = course.id.clone();
        Callback::from(move |_| on_edit.emit(id.clone()))
    };

    html! {
        <div class="detail-page">
            <div class="detail-header">
                { back_button(on_back) }
                <h1>{ course.name.clone() }</h1>
                <span class="mono subtle">{ course.id.clone() }</span>
                <button class="btn-primary" onclick={on_edit}>
                    <i class="material-icons">{"edit"}</i>
                    {"Edit"}
                </button>
            </div>
            <div class="card">
                <h2>{"Course Details"}</h2>
                { detail_row("Schedule", &course.schedule) }
                { detail_row("Time Slot", &course.time_slot) }
                { detail_row("Assigned Faculty", &course.faculty) }
                { detail_row("Assigned Students", &course.students.to_string()) }
            </div>
            <div class="card">
                <h2>{"Progress"}</h2>
                { detail_row("Classes Completed/Planned", &course.progress_label()) }
                <div class="progress">
                    <div class="progress-bar" style={format!("width: {}%", percent)}></div>
                </div>
            </div>
        </div>
    }
}
