//! Labelled inputs with their inline validation message.

use common::form::FieldErrors;
use yew::prelude::*;

pub fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
        None => html! {},
    }
}

fn label(text: &'static str, required: bool) -> Html {
    html! {
        <label class="field-label">
            { text }
            if required {
                <span class="required">{" *"}</span>
            }
        </label>
    }
}

pub struct TextField<'a> {
    pub label: &'static str,
    pub field: &'static str,
    pub value: &'a str,
    pub input_type: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'static str, field: &'static str, value: &'a str) -> Self {
        Self {
            label,
            field,
            value,
            input_type: "text",
            required: false,
            placeholder: "",
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn render(self, errors: &FieldErrors, oninput: Callback<InputEvent>) -> Html {
        let invalid = errors.get(self.field).is_some();
        html! {
            <div class="form-field">
                { label(self.label, self.required) }
                <input
                    class={classes!("input", invalid.then_some("invalid"))}
                    type={self.input_type}
                    value={self.value.to_string()}
                    placeholder={self.placeholder}
                    {oninput}
                />
                { field_error(errors, self.field) }
            </div>
        }
    }
}

/// Dropdown over `options`, with an empty first entry labelled `prompt`.
#[allow(clippy::too_many_arguments)]
pub fn select_field<S: AsRef<str>>(
    label_text: &'static str,
    field: &'static str,
    value: &str,
    options: &[S],
    prompt: &'static str,
    required: bool,
    errors: &FieldErrors,
    onchange: Callback<Event>,
) -> Html {
    let invalid = errors.get(field).is_some();
    html! {
        <div class="form-field">
            { label(label_text, required) }
            <select class={classes!("input", invalid.then_some("invalid"))} {onchange}>
                <option value="" selected={value.is_empty()}>{ prompt }</option>
                { for options.iter().map(|option| {
                    let option = option.as_ref().to_string();
                    html! {
                        <option value={option.clone()} selected={option == value}>{ option.clone() }</option>
                    }
                }) }
            </select>
            { field_error(errors, field) }
        </div>
    }
}

/// Numeric stepper with -/+ buttons.
pub fn stepper_field(
    label_text: &'static str,
    field: &'static str,
    value: u32,
    errors: &FieldErrors,
    oninput: Callback<InputEvent>,
    on_decrement: Callback<MouseEvent>,
    on_increment: Callback<MouseEvent>,
) -> Html {
    let shown = if value == 0 { String::new() } else { value.to_string() };
    html! {
        <div class="form-field">
            { label(label_text, true) }
            <div class="stepper">
                <input
                    class={classes!("input", errors.get(field).is_some().then_some("invalid"))}
                    type="number"
                    min="0"
                    value={shown}
                    {oninput}
                />
                <button type="button" class="icon-btn" onclick={on_decrement}>
                    <i class="material-icons">{"remove"}</i>
                </button>
                <button type="button" class="icon-btn" onclick={on_increment}>
                    <i class="material-icons">{"add"}</i>
                </button>
            </div>
            { field_error(errors, field) }
        </div>
    }
}

/// Parses a numeric input, treating anything unparsable as 0.
pub fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}
