//! Courses screen: list table, create/edit dialog and course detail.

use std::rc::Rc;

use common::form::course::CourseDraft;
use common::list_view::pagination::PageResetPolicy;
use common::list_view::row_menu::RowAction;
use common::model::course::Course;
use yew::prelude::*;

use crate::components::detail::not_found;
use crate::components::form_dialog::{FormDialog, FormOptions};
use crate::components::list_table::ListTable;

mod detail;
mod form;
pub mod table;

#[derive(Properties, PartialEq)]
pub struct CoursesPageProps {
    pub courses: Rc<Vec<Course>>,
    pub options: Rc<FormOptions>,
    pub on_create: Callback<CourseDraft>,
    pub on_update: Callback<(String, CourseDraft)>,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(String),
}

pub enum Msg {
    ShowList,
    ShowDetail(String),
    Row(String, RowAction),
    OpenCreate,
    OpenEdit(String),
    CloseDialog,
    Submitted(CourseDraft),
}

pub struct CoursesPage {
    detail: Option<String>,
    dialog: Dialog,
}

impl Component for CoursesPage {
    type Message = Msg;
    type Properties = CoursesPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            detail: None,
            dialog: Dialog::Closed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowList => self.detail = None,
            Msg::ShowDetail(id) => self.detail = Some(id),
            Msg::Row(id, RowAction::View) => self.detail = Some(id),
            Msg::Row(id, RowAction::Edit) | Msg::OpenEdit(id) => self.dialog = Dialog::Edit(id),
            Msg::OpenCreate => self.dialog = Dialog::Create,
            Msg::CloseDialog => self.dialog = Dialog::Closed,
            Msg::Submitted(draft) => {
                let props = ctx.props();
                match std::mem::replace(&mut self.dialog, Dialog::Closed) {
                    Dialog::Create => props.on_create.emit(draft),
                    Dialog::Edit(id) => props.on_update.emit((id, draft)),
                    Dialog::Closed => log::warn!("course form submitted while closed"),
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
            Some(id) => match props.courses.iter().find(|c| &c.id == id) {
                Some(course) => {
                    detail::course_detail(course, &on_back, &link.callback(Msg::OpenEdit))
                }
                None => not_found("Course", id, &on_back),
            },
            None => html! {
                <>
                    <h1 class="page-title">{"Courses"}</h1>
                    <ListTable<Course>
                        rows={props.courses.clone()}
                        reset_policy={PageResetPolicy::KeepPage}
                        on_row_action={link.callback(|(id, action): (String, RowAction)| Msg::Row(id, action))}
                        on_row_click={Some(link.callback(Msg::ShowDetail))}
                        on_add={Some(link.callback(|_: ()| Msg::OpenCreate))}
                    />
                </>
            },
        };

        let initial = match &self.dialog {
            Dialog::Edit(id) => props
                .courses
                .iter()
                .find(|c| &c.id == id)
                .map(CourseDraft::from),
            _ => None,
        };

        html! {
            <div class="page courses-page">
                { body }
                <FormDialog<CourseDraft>
                    open={self.dialog != Dialog::Closed}
                    {initial}
                    options={props.options.clone()}
                    on_submit={link.callback(Msg::Submitted)}
                    on_close={link.callback(|_: ()| Msg::CloseDialog)}
                    wide=true
                />
            </div>
        }
    }
}
