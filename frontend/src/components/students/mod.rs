//! Students screen: list table, create/edit dialog and the tabbed detail view.

use std::collections::BTreeMap;
use std::rc::Rc;

use common::form::enrollment::EnrolledCourseDraft;
use common::form::student::StudentDraft;
use common::list_view::pagination::PageResetPolicy;
use common::list_view::row_menu::RowAction;
use common::model::course::Course;
use common::model::student::Student;
use yew::prelude::*;

use crate::components::detail::not_found;
use crate::components::form_dialog::{FormDialog, FormOptions};
use crate::components::list_table::ListTable;

mod detail;
mod form;
mod table;

use detail::StudentDetail;

#[derive(Properties, PartialEq)]
pub struct StudentsPageProps {
    pub students: Rc<Vec<Student>>,
    pub courses: Rc<Vec<Course>>,
    pub enrolled_on: Rc<BTreeMap<String, String>>,
    pub options: Rc<FormOptions>,
    pub on_create: Callback<StudentDraft>,
    pub on_update: Callback<(String, StudentDraft)>,
    pub on_update_course: Callback<(String, EnrolledCourseDraft)>,
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
    Submitted(StudentDraft),
}

pub struct StudentsPage {
    detail: Option<String>,
    dialog: Dialog,
}

impl Component for StudentsPage {
    type Message = Msg;
    type Properties = StudentsPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            detail: None,
            dialog: Dialog::Closed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowList => self.detail = None,
            Msg::ShowDetail(id) | Msg::Row(id, RowAction::View) => self.detail = Some(id),
            Msg::Row(id, RowAction::Edit) | Msg::OpenEdit(id) => self.dialog = Dialog::Edit(id),
            Msg::OpenCreate => self.dialog = Dialog::Create,
            Msg::CloseDialog => self.dialog = Dialog::Closed,
            Msg::Submitted(draft) => {
                let props = ctx.props();
                match std::mem::replace(&mut self.dialog, Dialog::Closed) {
                    Dialog::Create => props.on_create.emit(draft),
                    Dialog::Edit(id) => props.on_update.emit((id, draft)),
                    Dialog::Closed => log::warn!("student form submitted while closed"),
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
            Some(id) => match props.students.iter().find(|s| &s.id == id) {
                Some(student) => html! {
                    <StudentDetail
                        student={student.clone()}
                        courses={props.courses.clone()}
                        enrolled_on={props.enrolled_on.clone()}
                        options={props.options.clone()}
                        on_back={on_back.clone()}
                        on_edit={link.callback(Msg::OpenEdit)}
                        on_update_course={props.on_update_course.clone()}
                    />
                },
                None => not_found("Student", id, &on_back),
            },
            None => html! {
                <>
                    <h1 class="page-title">{"Students"}</h1>
                    <ListTable<Student>
                        rows={props.students.clone()}
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
                .students
                .iter()
                .find(|s| &s.id == id)
                .map(StudentDraft::from),
            _ => None,
        };

        html! {
            <div class="page students-page">
                { body }
                <FormDialog<StudentDraft>
                    open={self.dialog != Dialog::Closed}
                    {initial}
                    on_submit={link.callback(Msg::Submitted)}
                    on_close={link.callback(|_: ()| Msg::CloseDialog)}
                    wide=true
                />
            </div>
        }
    }
}
