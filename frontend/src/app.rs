use std::collections::BTreeMap;
use std::rc::Rc;

use common::config::DashboardConfig;
use common::form::course::CourseDraft;
use common::form::enrollment::EnrolledCourseDraft;
use common::form::faculty::{AvailabilityDraft, FacultyDraft};
use common::form::student::StudentDraft;
use common::list_view::query::ListRow;
use common::model::course::Course;
use common::model::faculty::Faculty;
use common::model::notification::{unread_count, Notification};
use common::model::student::Student;
use common::repository::{Entity, InMemoryRepository, Repository, RepositoryError};
use common::seed;
use yew::prelude::*;

use crate::components::courses::CoursesPage;
use crate::components::faculty::FacultyPage;
use crate::components::form_dialog::FormOptions;
use crate::components::notifications::{notifications_page, notifications_panel};
use crate::components::shell::{header, sidebar, Page};
use crate::components::students::StudentsPage;
use crate::toast::{show_toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<DashboardConfig>,
}

pub enum Msg {
    Navigate(Page),
    TogglePanel,
    ClosePanel,
    ViewAllNotifications,
    CreateCourse(CourseDraft),
    UpdateCourse(String, CourseDraft),
    UpdateEnrolledCourse(String, EnrolledCourseDraft),
    CreateStudent(StudentDraft),
    UpdateStudent(String, StudentDraft),
    CreateFaculty(FacultyDraft),
    UpdateFaculty(String, FacultyDraft),
    UpdateAvailability(String, AvailabilityDraft),
}

/// Owns every repository. Pages get snapshots and send mutations back here.
pub struct App {
    page: Page,
    panel_open: bool,
    courses: InMemoryRepository<Course>,
    students: InMemoryRepository<Student>,
    faculty: InMemoryRepository<Faculty>,
    notifications: Rc<Vec<Notification>>,
    enrolled_on: Rc<BTreeMap<String, String>>,
}

impl App {
    fn toast(&self, ctx: &Context<Self>, message: &str, kind: ToastKind) {
        show_toast(message, kind, ctx.props().config.toast_duration_ms);
    }

    fn created<E: Entity>(&self, ctx: &Context<Self>, record: &E) {
        self.toast(
            ctx,
            &format!("{} {} created", capitalized(E::KIND), record.row_id()),
            ToastKind::Success,
        );
    }

    fn updated<E: Entity>(&self, ctx: &Context<Self>, result: Result<E, RepositoryError>) {
        match result {
            Ok(record) => self.toast(
                ctx,
                &format!("{} {} updated", capitalized(E::KIND), record.row_id()),
                ToastKind::Success,
            ),
            Err(err) => {
                log::warn!("update rejected: {}", err);
                self.toast(ctx, &err.to_string(), ToastKind::Error);
            }
        }
    }

    fn form_options(&self) -> Rc<FormOptions> {
        Rc::new(FormOptions {
            faculty: self.faculty.list().iter().map(Faculty::full_name).collect(),
            students: self.students.list().iter().map(|s| s.name.clone()).collect(),
        })
    }

    fn body(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::Courses => html! {
                <CoursesPage
                    courses={Rc::new(self.courses.list().to_vec())}
                    options={self.form_options()}
                    on_create={link.callback(Msg::CreateCourse)}
                    on_update={link.callback(|(id, draft): (String, CourseDraft)| Msg::UpdateCourse(id, draft))}
                />
            },
            Page::Students => html! {
                <StudentsPage
                    students={Rc::new(self.students.list().to_vec())}
                    courses={Rc::new(self.courses.list().to_vec())}
                    enrolled_on={self.enrolled_on.clone()}
                    options={self.form_options()}
                    on_create={link.callback(Msg::CreateStudent)}
                    on_update={link.callback(|(id, draft): (String, StudentDraft)| Msg::UpdateStudent(id, draft))}
                    on_update_course={link.callback(|(id, row): (String, EnrolledCourseDraft)| {
                        Msg::UpdateEnrolledCourse(id, row)
                    })}
                />
            },
            Page::Faculty => html! {
                <FacultyPage
                    faculty={Rc::new(self.faculty.list().to_vec())}
                    on_create={link.callback(Msg::CreateFaculty)}
                    on_update={link.callback(|(id, draft): (String, FacultyDraft)| Msg::UpdateFaculty(id, draft))}
                    on_update_availability={link.callback(|(id, draft): (String, AvailabilityDraft)| {
                        Msg::UpdateAvailability(id, draft)
                    })}
                />
            },
            Page::Notifications => notifications_page(&self.notifications),
        }
    }
}

fn capitalized(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let offset = ctx.props().config.id_offset;
        let app = Self {
            page: Page::Courses,
            panel_open: false,
            courses: InMemoryRepository::new(seed::courses(), offset),
            students: InMemoryRepository::new(seed::students(), offset),
            faculty: InMemoryRepository::new(seed::faculty(), offset),
            notifications: Rc::new(seed::notifications()),
            enrolled_on: Rc::new(seed::enrollment_dates()),
        };
        log::info!(
            "dashboard ready: {} courses, {} students, {} faculty",
            app.courses.len(),
            app.students.len(),
            app.faculty.len()
        );
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                self.page = page;
                self.panel_open = false;
            }
            Msg::TogglePanel => self.panel_open = !self.panel_open,
            Msg::ClosePanel => self.panel_open = false,
            Msg::ViewAllNotifications => {
                self.page = Page::Notifications;
                self.panel_open = false;
            }
            Msg::CreateCourse(draft) => {
                let course = self.courses.create(draft.into_new_course());
                self.created(ctx, &course);
            }
            Msg::UpdateCourse(id, draft) => {
                let result = self.courses.update(&id, draft.into_patch());
                self.updated(ctx, result);
            }
            Msg::UpdateEnrolledCourse(id, row) => {
                let result = self.courses.update(&id, row.to_patch());
                self.updated(ctx, result);
            }
            Msg::CreateStudent(draft) => {
                let student = self.students.create(draft.into_new_student());
                self.created(ctx, &student);
            }
            Msg::UpdateStudent(id, draft) => {
                let result = self.students.update(&id, draft.into_patch());
                self.updated(ctx, result);
            }
            Msg::CreateFaculty(draft) => {
                let faculty = self.faculty.create(draft.into_new_faculty());
                self.created(ctx, &faculty);
            }
            Msg::UpdateFaculty(id, draft) => {
                let result = self.faculty.update(&id, draft.into_patch());
                self.updated(ctx, result);
            }
            Msg::UpdateAvailability(id, draft) => {
                let result = self.faculty.update(&id, draft.into_patch());
                self.updated(ctx, result);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let on_close_panel = link.callback(|_: ()| Msg::ClosePanel);
        let on_view_all = link.callback(|_: ()| Msg::ViewAllNotifications);
        let on_bell = link.callback(|_: ()| Msg::TogglePanel);
        let unread = unread_count(&self.notifications);

        html! {
            <ContextProvider<Rc<DashboardConfig>> context={props.config.clone()}>
                <div class="layout">
                    { sidebar(self.page, &link.callback(Msg::Navigate)) }
                    <div class="main">
                        { header("Admin Dashboard", unread, &on_bell) }
                        if self.panel_open {
                            { notifications_panel(&self.notifications, &on_close_panel, &on_view_all) }
                        }
                        <main class="content">
                            { self.body(ctx) }
                        </main>
                    </div>
                </div>
            </ContextProvider<Rc<DashboardConfig>>>
        }
    }
}
