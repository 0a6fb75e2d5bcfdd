//! Generic create/edit dialog driven by `common::form::FormState`.
//!
//! The dialog owns the form state. The parent owns `open` and the record
//! being edited; when that record changes while the dialog is open the
//! draft is re-seeded from it. A valid submit hands the draft to
//! `on_submit` once and resets the form.

use std::rc::Rc;

use common::config::DashboardConfig;
use common::form::{Draft, FieldErrors, FormMode, FormState};
use yew::prelude::*;

use crate::sheet::modal_sheet::ModalSheet;
use crate::toast::{show_toast, ToastKind};

mod field_link;
pub mod fields;

pub use field_link::FieldLink;

/// Choices that come from other repositories, such as the faculty roster
/// offered by the course form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub faculty: Vec<String>,
    pub students: Vec<String>,
}

/// A draft type that knows how to render its own fields.
pub trait FormFields: Draft + 'static {
    /// Toast shown when a submit fails validation.
    const INVALID_TOAST: Option<&'static str> = None;

    fn title(mode: FormMode, initial: Option<&Self>) -> String;

    fn submit_label(mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => "Create",
            FormMode::Edit => "Save Changes",
        }
    }

    fn fields(draft: &Self, errors: &FieldErrors, link: &FieldLink<Self>) -> Html;
}

pub enum Msg<D> {
    Edit(&'static str, Box<dyn FnOnce(&mut D)>),
    Submit,
    Cancel,
}

#[derive(Properties, PartialEq)]
pub struct FormDialogProps<D: FormFields> {
    pub open: bool,
    /// The record being edited. `None` opens the dialog in create mode.
    #[prop_or_default]
    pub initial: Option<D>,
    pub on_submit: Callback<D>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub options: Rc<FormOptions>,
    #[prop_or_default]
    pub wide: bool,
}

pub struct FormDialog<D: FormFields> {
    form: FormState<D>,
    config: Rc<DashboardConfig>,
}

impl<D: FormFields> FormDialog<D> {
    fn open_from(&mut self, props: &FormDialogProps<D>) {
        match &props.initial {
            Some(initial) => self.form.open_edit(initial.clone()),
            None => self.form.open_create(),
        }
    }
}

impl<D: FormFields> Component for FormDialog<D> {
    type Message = Msg<D>;
    type Properties = FormDialogProps<D>;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<Rc<DashboardConfig>>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        let mut dialog = Self {
            form: FormState::default(),
            config,
        };
        if ctx.props().open {
            dialog.open_from(ctx.props());
        }
        dialog
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Edit(field, apply) => self.form.edit(field, apply),
            Msg::Submit => match self.form.submit() {
                Some(draft) => props.on_submit.emit(draft),
                None => {
                    if let Some(message) = D::INVALID_TOAST {
                        show_toast(message, ToastKind::Error, self.config.toast_duration_ms);
                    }
                }
            },
            Msg::Cancel => {
                self.form.cancel();
                props.on_close.emit(());
            }
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        match (old_props.open, props.open) {
            (false, true) => self.open_from(props),
            (true, false) => self.form.cancel(),
            (true, true) => {
                if let Some(initial) = &props.initial {
                    self.form.sync_initial(initial);
                }
            }
            (false, false) => {}
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let mode = self.form.mode();
        let fields = FieldLink::new(link.clone(), self.config.clone(), props.options.clone());
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <ModalSheet
                open={props.open}
                title={D::title(mode, props.initial.as_ref())}
                on_close={link.callback(|_: ()| Msg::Cancel)}
                wide={props.wide}
            >
                <form class="dialog-form" {onsubmit} novalidate=true>
                    { D::fields(self.form.draft(), self.form.errors(), &fields) }
                    <div class="dialog-actions">
                        <button type="button" class="btn-outline" onclick={link.callback(|_| Msg::Cancel)}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary">{ D::submit_label(mode) }</button>
                    </div>
                </form>
            </ModalSheet>
        }
    }
}
