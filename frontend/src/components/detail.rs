//! Building blocks shared by the detail screens.

use yew::prelude::*;

/// Label/value pair inside a detail card. Empty values render as "-".
pub fn detail_row(label: &'static str, value: &str) -> Html {
    let value = if value.trim().is_empty() { "-" } else { value };
    html! {
        <div class="detail-row">
            <span class="detail-label">{ label }</span>
            <span class="detail-value">{ value.to_string() }</span>
        </div>
    }
}

pub fn back_button(on_back: &Callback<()>) -> Html {
    let on_back = on_back.clone();
    html! {
        <button class="btn-text back" onclick={Callback::from(move |_| on_back.emit(()))}>
            <i class="material-icons">{"arrow_back"}</i>
            {"Back"}
        </button>
    }
}

/// Shown when a detail screen is asked for an id its repository no longer has.
pub fn not_found(kind: &'static str, id: &str, on_back: &Callback<()>) -> Html {
    html! {
        <div class="not-found">
            <i class="material-icons">{"search_off"}</i>
            <h2>{ format!("{} not found", kind) }</h2>
            <p>{ format!("No {} with id {} exists.", kind.to_lowercase(), id) }</p>
            { back_button(on_back) }
        </div>
    }
}

/// Plain text cell for a list table row.
pub fn text(value: impl Into<String>) -> Html {
    let value: String = value.into();
    html! { <>{ value }</> }
}
