//! Student detail screen with its Overview, Enrolled Courses and
//! Parent/Guardian tabs.

use std::collections::BTreeMap;
use std::rc::Rc;

use common::form::enrollment::EnrolledCourseDraft;
use common::list_view::pagination::PageResetPolicy;
use common::list_view::row_menu::RowAction;
use common::model::course::{Course, EnrolledCourse};
use common::model::student::Student;
use yew::prelude::*;

use crate::components::detail::{back_button, detail_row};
use crate::components::form_dialog::{FormDialog, FormOptions};
use crate::components::list_table::ListTable;
use crate::sheet::modal_sheet::ModalSheet;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    EnrolledCourses,
    Parent,
}

#[derive(Properties, PartialEq)]
pub struct StudentDetailProps {
    pub student: Student,
    pub courses: Rc<Vec<Course>>,
    pub enrolled_on: Rc<BTreeMap<String, String>>,
    pub options: Rc<FormOptions>,
    pub on_back: Callback<()>,
    pub on_edit: Callback<String>,
    /// Course id plus the edited enrolment row.
    pub on_update_course: Callback<(String, EnrolledCourseDraft)>,
}

pub enum Msg {
    SelectTab(Tab),
    Row(String, RowAction),
    CloseModal,
    Submitted(EnrolledCourseDraft),
}

enum Modal {
    None,
    View(String),
    Edit(String),
}

pub struct StudentDetail {
    tab: Tab,
    modal: Modal,
}

impl StudentDetail {
    fn enrolled(props: &StudentDetailProps) -> Vec<EnrolledCourse> {
        props.student.enrolled_courses(&props.courses, &props.enrolled_on)
    }
}

impl Component for StudentDetail {
    type Message = Msg;
    type Properties = StudentDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Overview,
            modal: Modal::None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) => self.tab = tab,
            Msg::Row(id, RowAction::View) => self.modal = Modal::View(id),
            Msg::Row(id, RowAction::Edit) => self.modal = Modal::Edit(id),
            Msg::CloseModal => self.modal = Modal::None,
            Msg::Submitted(row) => {
                if let Modal::Edit(id) = std::mem::replace(&mut self.modal, Modal::None) {
                    ctx.props().on_update_course.emit((id, row));
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let student = &props.student;
        let enrolled = Self::enrolled(props);

        let tab_button = |tab: Tab, label: String| {
            html! {
                <button
                    class={classes!("tab", (self.tab == tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectTab(tab))}
                >
                    { label }
                </button>
            }
        };
        let on_edit = {
            let on_edit = props.on_edit.clone();
            let id = student.id.clone();
            Callback::from(move |_| on_edit.emit(id.clone()))
        };

        let body = match self.tab {
            Tab::Overview => html! {
                <div class="card">
                    <h2>{"Basic Details"}</h2>
                    { detail_row("Student ID", &student.id) }
                    { detail_row("Grade", &student.grade) }
                    { detail_row("Date of Birth", &student.date_of_birth) }
                    { detail_row("Email", &student.email) }
                    { detail_row("Mobile Number", &student.mobile) }
                </div>
            },
            Tab::EnrolledCourses => html! {
                <ListTable<EnrolledCourse>
                    rows={Rc::new(enrolled.clone())}
                    reset_policy={PageResetPolicy::KeepPage}
                    on_row_action={link.callback(|(id, action): (String, RowAction)| Msg::Row(id, action))}
                />
            },
            Tab::Parent => html! {
                <div class="card">
                    <h2>{"Parent Details"}</h2>
                    { detail_row("Parent Name", &student.parent_name) }
                    { detail_row("Parent Email", &student.parent_email) }
                    { detail_row("Parent Mobile", &student.parent_mobile) }
                </div>
            },
        };

        let viewing = match &self.modal {
            Modal::View(id) => enrolled.iter().find(|row| &row.course.id == id),
            _ => None,
        };
        let editing = match &self.modal {
            Modal::Edit(id) => enrolled.iter().find(|row| &row.course.id == id).cloned(),
            _ => None,
        };

        html! {
            <div class="detail-page">
                <div class="detail-header">
                    { back_button(&props.on_back) }
                    <h1>{ student.name.clone() }</h1>
                    <span class="mono subtle">{ student.id.clone() }</span>
                    <button class="btn-primary" onclick={on_edit}>
                        <i class="material-icons">{"edit"}</i>
                        {"Edit"}
                    </button>
                </div>
                <div class="tabs">
                    { tab_button(Tab::Overview, "Overview".to_string()) }
                    { tab_button(Tab::EnrolledCourses, format!("Enrolled Courses ({})", enrolled.len())) }
                    { tab_button(Tab::Parent, "Parent/Guardian".to_string()) }
                </div>
                { body }
                { view_course_modal(viewing, student, link.callback(|_: ()| Msg::CloseModal)) }
                <FormDialog<EnrolledCourseDraft>
                    open={editing.is_some()}
                    initial={editing}
                    options={props.options.clone()}
                    on_submit={link.callback(Msg::Submitted)}
                    on_close={link.callback(|_: ()| Msg::CloseModal)}
                    wide=true
                />
            </div>
        }
    }
}

fn view_course_modal(
    row: Option<&EnrolledCourse>,
    student: &Student,
    on_close: Callback<()>,
) -> Html {
    let Some(row) = row else {
        return html! {
            <ModalSheet open=false title="Course Details" {on_close} />
        };
    };
    let course = &row.course;
    let others = course.students.count().saturating_sub(1);
    html! {
        <ModalSheet open=true title={format!("Course Details: {}", course.id)} {on_close}>
            <div class="detail-list">
                { detail_row("Course Name", &course.name) }
                { detail_row("Schedule", &course.schedule) }
                { detail_row("Time Slot (24 hrs)", &course.time_slot) }
                { detail_row("Assigned Faculty", &course.faculty) }
                { detail_row("Enrolled Student(s)", &format!("{} (+{} others)", student.name, others)) }
                { detail_row("Total Class Hours", &course.planned.to_string()) }
                { detail_row("Completed Classes", &course.completed.to_string()) }
                { detail_row("Course Enrolled On", &row.enrolled_on) }
            </div>
        </ModalSheet>
    }
}
