//! Faculty screen: list table with the subject popover, create/edit dialog,
//! detail cards and the availability dialog.

use std::rc::Rc;

use common::form::faculty::{AvailabilityDraft, FacultyDraft};
use common::list_view::pagination::PageResetPolicy;
use common::list_view::row_menu::RowAction;
use common::model::faculty::Faculty;
use yew::prelude::*;

use crate::components::detail::not_found;
use crate::components::form_dialog::FormDialog;
use crate::components::list_table::ListTable;

mod detail;
mod form;
mod table;

use detail::{faculty_detail, FacultyDetailActions};

#[derive(Properties, PartialEq)]
pub struct FacultyPageProps {
    pub faculty: Rc<Vec<Faculty>>,
    pub on_create: Callback<FacultyDraft>,
    pub on_update: Callback<(String, FacultyDraft)>,
    pub on_update_availability: Callback<(String, AvailabilityDraft)>,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(String),
    Availability(String),
}

pub enum Msg {
    ShowList,
    ShowDetail(String),
    Row(String, RowAction),
    OpenCreate,
    OpenEdit(String),
    OpenAvailability(String),
    CloseDialog,
    Submitted(FacultyDraft),
    AvailabilitySubmitted(AvailabilityDraft),
}

pub struct FacultyPage {
    detail: Option<String>,
    dialog: Dialog,
}

impl FacultyPage {
    fn find<'a>(props: &'a FacultyPageProps, id: &str) -> Option<&'a Faculty> {
        props.faculty.iter().find(|f| f.id == id)
    }
}

impl Component for FacultyPage {
    type Message = Msg;
    type Properties = FacultyPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            detail: None,
            dialog: Dialog::Closed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::ShowList => self.detail = None,
            Msg::ShowDetail(id) | Msg::Row(id, RowAction::View) => self.detail = Some(id),
            Msg::Row(id, RowAction::Edit) | Msg::OpenEdit(id) => self.dialog = Dialog::Edit(id),
            Msg::OpenCreate => self.dialog = Dialog::Create,
            Msg::OpenAvailability(id) => self.dialog = Dialog::Availability(id),
            Msg::CloseDialog => self.dialog = Dialog::Closed,
            Msg::Submitted(draft) => match std::mem::replace(&mut self.dialog, Dialog::Closed) {
                Dialog::Create => props.on_create.emit(draft),
                Dialog::Edit(id) => props.on_update.emit((id, draft)),
                other => {
                    log::warn!("faculty form submitted without an open faculty dialog");
                    self.dialog = other;
                }
            },
            Msg::AvailabilitySubmitted(draft) => {
                match std::mem::replace(&mut self.dialog, Dialog::Closed) {
                    Dialog::Availability(id) => props.on_update_availability.emit((id, draft)),
                    other => {
                        log::warn!("availability submitted without an open availability dialog");
                        self.dialog = other;
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let on_back = link.callback(|_: ()| Msg::ShowList);

        let body = match &self.detail {
            Some(id) => match Self::find(props, id) {
                Some(faculty) => faculty_detail(
                    faculty,
                    &FacultyDetailActions {
                        on_back,
                        on_edit: link.callback(Msg::OpenEdit),
                        on_manage_availability: link.callback(Msg::OpenAvailability),
                    },
                ),
                None => not_found("Faculty", id, &on_back),
            },
            None => html! {
                <>
                    <h1 class="page-title">{"Faculty"}</h1>
                    <ListTable<Faculty>
                        rows={props.faculty.clone()}
                        reset_policy={PageResetPolicy::ResetOnFilterChange}
                        on_row_action={link.callback(|(id, action): (String, RowAction)| Msg::Row(id, action))}
                        on_row_click={Some(link.callback(Msg::ShowDetail))}
                        on_add={Some(link.callback(|_: ()| Msg::OpenCreate))}
                    />
                </>
            },
        };

        let (details_open, details_initial) = match &self.dialog {
            Dialog::Create => (true, None),
            Dialog::Edit(id) => (true, Self::find(props, id).map(FacultyDraft::from)),
            _ => (false, None),
        };
        let (slots_open, slots_initial) = match &self.dialog {
            Dialog::Availability(id) => (
                true,
                Self::find(props, id).map(AvailabilityDraft::for_faculty),
            ),
            _ => (false, None),
        };

        html! {
            <div class="page faculty-page">
                { body }
                <FormDialog<FacultyDraft>
                    open={details_open}
                    initial={details_initial}
                    on_submit={link.callback(Msg::Submitted)}
                    on_close={link.callback(|_: ()| Msg::CloseDialog)}
                    wide=true
                />
                <FormDialog<AvailabilityDraft>
                    open={slots_open}
                    initial={slots_initial}
                    on_submit={link.callback(Msg::AvailabilitySubmitted)}
                    on_close={link.callback(|_: ()| Msg::CloseDialog)}
                />
            </div>
        }
    }
}
