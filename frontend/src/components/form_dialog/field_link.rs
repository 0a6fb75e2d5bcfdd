use std::rc::Rc;

use common::config::DashboardConfig;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::{FormDialog, FormFields, FormOptions, Msg};

/// Builds the DOM callbacks a form's fields use to edit the draft.
///
/// Every callback names the field it edits, so that field's validation
/// message is cleared as soon as the user touches it.
pub struct FieldLink<D: FormFields> {
    link: Scope<FormDialog<D>>,
    pub config: Rc<DashboardConfig>,
    pub options: Rc<FormOptions>,
}

impl<D: FormFields> FieldLink<D> {
    pub fn new(
        link: Scope<FormDialog<D>>,
        config: Rc<DashboardConfig>,
        options: Rc<FormOptions>,
    ) -> Self {
        Self {
            link,
            config,
            options,
        }
    }

    /// Text, number, date and time inputs.
    pub fn input<F>(&self, field: &'static str, set: F) -> Callback<InputEvent>
    where
        F: Fn(&mut D, String) + 'static,
    {
        let set = Rc::new(set);
        self.link.callback(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let set = set.clone();
            Msg::Edit(field, Box::new(move |draft: &mut D| set(draft, value)))
        })
    }

    pub fn select<F>(&self, field: &'static str, set: F) -> Callback<Event>
    where
        F: Fn(&mut D, String) + 'static,
    {
        let set = Rc::new(set);
        self.link.callback(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let set = set.clone();
            Msg::Edit(field, Box::new(move |draft: &mut D| set(draft, value)))
        })
    }

    /// Buttons, checkboxes and steppers.
    pub fn click<F>(&self, field: &'static str, apply: F) -> Callback<MouseEvent>
    where
        F: Fn(&mut D) + 'static,
    {
        let apply = Rc::new(apply);
        self.link.callback(move |e: MouseEvent| {
            e.prevent_default();
            let apply = apply.clone();
            Msg::Edit(field, Box::new(move |draft: &mut D| apply(draft)))
        })
    }
}
