use common::config::DashboardConfig;
use common::form::course::CourseDraft;
use common::form::faculty::{AvailabilityDraft, FacultyDraft};
use common::form::{Draft, FormPhase, FormState};
use common::list_view::ListViewState;
use common::list_view::pagination::{PageNav, PageResetPolicy};
use common::list_view::row_menu::{ClickTarget, ListenerChange, RowAction};
use common::model::course::{Course, EnrolledCourse};
use common::model::faculty::Faculty;
use common::model::student::Student;
use common::repository::{InMemoryRepository, Repository, RepositoryError};
use common::seed;

#[test]
fn create_course_through_form_and_find_it_in_the_list() {
    let config = DashboardConfig::default();
    let mut repo = InMemoryRepository::new(seed::courses(), config.id_offset);
    let mut list: ListViewState<Course> =
        ListViewState::new(config.default_page_size, PageResetPolicy::KeepPage);
    let mut form: FormState<CourseDraft> = FormState::default();

    assert_eq!(list.view(repo.list()).window.label(), "1 - 7 of 7");

    form.open_create();
    form.edit("name", |d| d.name = "Art History".to_string());
    assert_eq!(form.submit(), None);
    assert_eq!(form.phase(), FormPhase::Invalid);
    assert!(form.error("total_hours").is_some());

    form.edit("total_hours", |d| d.step_hours(true));
    form.edit("schedule", |d| d.schedule = "Mon, Thu".to_string());
    let draft = form.submit().unwrap();
    assert!(!form.is_open());

    let created = repo.create(draft.into_new_course());
    assert_eq!(created.id, "CRS108");

    let view = list.view(repo.list());
    assert_eq!(view.window.label(), "1 - 7 of 8");
    assert_eq!(view.window.total_pages, 2);

    list.navigate(PageNav::Next, repo.list());
    let page_two = list.view(repo.list());
    assert_eq!(page_two.rows, vec![&created]);

    list.set_query("history");
    let found = list.view(repo.list());
    let ids: Vec<&str> = found.rows.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["HIS102", "CRS108"]);
    assert_eq!(found.window.page, 1);
}

#[test]
fn edit_course_from_row_menu() {
    let mut repo = InMemoryRepository::new(seed::courses(), 101);
    let mut list: ListViewState<Course> = ListViewState::new(7, PageResetPolicy::KeepPage);
    let mut form: FormState<CourseDraft> = FormState::default();

    assert_eq!(list.menu_mut().toggle("BIO101"), ListenerChange::Install);
    assert_eq!(list.menu_mut().toggle("CHE101"), ListenerChange::Keep);
    assert_eq!(list.menu().active(), Some("CHE101"));

    let action = RowAction::Edit;
    assert_eq!(list.menu_mut().close(), ListenerChange::Remove);
    assert_eq!(action.to_string(), "Edit");

    let course = repo.get("CHE101").unwrap();
    form.open_edit(CourseDraft::from(&course));
    form.edit("name", |d| d.name = "General Chemistry".to_string());
    let patch = form.submit().unwrap().into_patch();

    let updated = repo.update("CHE101", patch).unwrap();
    assert_eq!(updated.name, "General Chemistry");
    assert_eq!(updated.completed, 17);

    assert_eq!(
        list.menu_mut().pointer_down(ClickTarget::default()),
        ListenerChange::Keep
    );
}

#[test]
fn faculty_create_then_manage_availability() {
    let config = DashboardConfig::default();
    let mut repo = InMemoryRepository::new(seed::faculty(), config.id_offset);
    let mut list: ListViewState<Faculty> =
        ListViewState::new(2, PageResetPolicy::ResetOnFilterChange);

    let mut form: FormState<FacultyDraft> = FormState::default();
    form.open_create();
    form.edit("first_name", |d| d.first_name = "Nina".to_string());
    assert_eq!(form.submit(), None);
    form.edit("mobile", |d| d.mobile = "555-0100".to_string());
    form.edit("subject", |d| d.subject = config.subjects[6].clone());
    let created = repo.create(form.submit().unwrap().into_new_faculty());
    assert_eq!(created.id, "FAC108");
    assert_eq!(created.subject, "Art");

    let mut availability: FormState<AvailabilityDraft> = FormState::default();
    availability.open_edit(AvailabilityDraft::for_faculty(&created));
    assert_eq!(availability.submit(), None);
    assert!(availability.error("slots").is_some());

    availability.edit("slots", |d| {
        let slot = &mut d.slots[0];
        slot.toggle_day("Sat");
        slot.start_time = "10:00".to_string();
        slot.end_time = "12:00".to_string();
    });
    let patch = availability.submit().unwrap().into_patch();
    let updated = repo.update(&created.id, patch).unwrap();
    assert_eq!(updated.availability.len(), 1);

    list.navigate(PageNav::Last, repo.list());
    list.update_filters(|f| f.toggle_subject("Art"));
    let view = list.view(repo.list());
    assert_eq!(view.window.page, 1);
    assert_eq!(view.rows, vec![&updated]);
}

#[test]
fn student_detail_lookup_and_enrolled_courses() {
    let mut students = InMemoryRepository::new(seed::students(), 101);
    let courses = seed::courses();
    let dates = seed::enrollment_dates();

    let alice: Student = students.get("STU101").unwrap();
    let enrolled = alice.enrolled_courses(&courses, &dates);
    assert_eq!(enrolled.len(), 3);

    let mut table: ListViewState<EnrolledCourse> =
        ListViewState::new(7, PageResetPolicy::KeepPage);
    table.update_filters(|f| f.day = Some("Fri".to_string()));
    let view = table.view(&enrolled);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].course.id, "CHE101");
    assert_eq!(view.rows[0].enrolled_on, "2024-03-10");

    let mut edited = view.rows[0].clone();
    edited.course.completed = edited.course.planned + 1;
    assert!(!edited.validate().is_empty());

    assert_eq!(students.get("STU999"), None);
    assert_eq!(
        students.delete("STU999"),
        Err(RepositoryError::NotFound {
            kind: "student",
            id: "STU999".to_string()
        })
    );
}
