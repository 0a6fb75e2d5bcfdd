//! Records the dashboard starts with.

use std::collections::BTreeMap;

use crate::model::course::{Course, CourseStudents};
use crate::model::faculty::{AvailabilitySlot, Faculty};
use crate::model::notification::{Notification, UserRole};
use crate::model::student::Student;

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    name: &str,
    schedule: &str,
    time_slot: &str,
    faculty: &str,
    students: u32,
    planned: u32,
    completed: u32,
) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        schedule: schedule.to_string(),
        time_slot: time_slot.to_string(),
        faculty: faculty.to_string(),
        students: CourseStudents::Count(students),
        planned,
        completed,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course("MAT101", "Mathematics", "Mon, Tue, Wed", "08:00-10:00", "Michael Jones", 2, 25, 12),
        course("BIO101", "Biology", "Tue, Thu", "10:00-12:00", "Sarah Smith", 1, 15, 10),
        course("CHE101", "Chemistry", "Mon, Wed, Fri", "13:00-15:00", "Emily Davis", 1, 34, 17),
        course("PHY103", "Physics", "Tue, Thu", "15:00-17:00", "David Wilson", 2, 59, 10),
        course("CHE102", "Adv.Chemistry", "Mon, Fri", "09:00-11:00", "Jessica Lee", 1, 60, 35),
        course("LIT101", "Literature", "Wed, Fri", "11:00-13:00", "Chris Taylor", 2, 15, 12),
        course("HIS102", "History", "Mon, Thu", "10:00-12:00", "Alex Morgan", 1, 15, 1),
    ]
}

/// Enrolment date per course id.
pub fn enrollment_dates() -> BTreeMap<String, String> {
    [
        ("MAT101", "2024-01-15"),
        ("BIO101", "2024-02-20"),
        ("CHE101", "2024-03-10"),
        ("PHY103", "2024-04-01"),
        ("LIT101", "2024-05-18"),
        ("HIS102", "2024-02-28"),
    ]
    .into_iter()
    .map(|(id, date)| (id.to_string(), date.to_string()))
    .collect()
}

struct StudentRow<'a> {
    id: &'a str,
    name: &'a str,
    grade: &'a str,
    date_of_birth: &'a str,
    email: &'a str,
    mobile: &'a str,
    parent: (&'a str, &'a str, &'a str),
    courses: &'a [&'a str],
}

impl From<StudentRow<'_>> for Student {
    fn from(row: StudentRow<'_>) -> Self {
        let (parent_name, parent_email, parent_mobile) = row.parent;
        Student {
            id: row.id.to_string(),
            name: row.name.to_string(),
            grade: row.grade.to_string(),
            date_of_birth: row.date_of_birth.to_string(),
            email: row.email.to_string(),
            mobile: row.mobile.to_string(),
            parent_name: parent_name.to_string(),
            parent_email: parent_email.to_string(),
            parent_mobile: parent_mobile.to_string(),
            enrolled_course_ids: row.courses.iter().map(|c| c.to_string()).collect(),
        }
    }
}

pub fn students() -> Vec<Student> {
    [
        StudentRow {
            id: "STU101",
            name: "Alice Smith",
            grade: "10",
            date_of_birth: "2008-05-15",
            email: "alice.s@example.com",
            mobile: "123-456-7890",
            parent: ("John Smith", "john.s@example.com", "987-654-3210"),
            courses: &["MAT101", "BIO101", "CHE101"],
        },
        StudentRow {
            id: "STU102",
            name: "Bob Johnson",
            grade: "11",
            date_of_birth: "2007-09-22",
            email: "bob.j@example.com",
            mobile: "234-567-8901",
            parent: ("Jane Johnson", "jane.j@example.com", "876-543-2109"),
            courses: &["PHY103", "LIT101"],
        },
        StudentRow {
            id: "STU103",
            name: "Charlie Brown",
            grade: "10",
            date_of_birth: "2008-02-10",
            email: "charlie.b@example.com",
            mobile: "345-678-9012",
            parent: ("Sally Brown", "sally.b@example.com", "765-432-1098"),
            courses: &["MAT101", "HIS102"],
        },
        StudentRow {
            id: "STU104",
            name: "Diana Prince",
            grade: "12",
            date_of_birth: "2006-11-30",
            email: "diana.p@example.com",
            mobile: "456-789-0123",
            parent: ("Queen Hippolyta", "hippolyta@them.com", "654-321-0987"),
            courses: &["PHY103", "LIT101"],
        },
        StudentRow {
            id: "STU105",
            name: "Eve Adams",
            grade: "9",
            date_of_birth: "2009-07-19",
            email: "eve.a@example.com",
            mobile: "567-890-1234",
            parent: ("Adam Adams", "adam.a@example.com", "543-210-9876"),
            courses: &["BIO101", "LIT101", "HIS102"],
        },
        StudentRow {
            id: "STU106",
            name: "Frank White",
            grade: "11",
            date_of_birth: "2007-03-25",
            email: "frank.w@example.com",
            mobile: "678-901-2345",
            parent: ("Mary White", "mary.w@example.com", "432-109-8765"),
            courses: &[],
        },
        StudentRow {
            id: "STU107",
            name: "Grace Green",
            grade: "10",
            date_of_birth: "2008-08-08",
            email: "grace.g@example.com",
            mobile: "789-012-3456",
            parent: ("Peter Green", "peter.g@example.com", "321-098-7654"),
            courses: &[],
        },
    ]
    .into_iter()
    .map(Student::from)
    .collect()
}

fn slot(days: &[&str], start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        days: days.iter().map(|d| d.to_string()).collect(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn tutor(id: &str, first: &str, last: &str, gender: &str, subject: &str, mobile: &str) -> Faculty {
    Faculty {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: Some(last.to_string()),
        gender: Some(gender.to_string()),
        date_of_birth: None,
        email: Some(format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        )),
        mobile: mobile.to_string(),
        subject: subject.to_string(),
        availability: Vec::new(),
    }
}

/// The tutors assigned to the seed courses.
pub fn faculty() -> Vec<Faculty> {
    let mut roster = vec![
        tutor("FAC101", "Michael", "Jones", "Male", "Mathematics", "555-201-1001"),
        tutor("FAC102", "Sarah", "Smith", "Female", "Biology", "555-201-1002"),
        tutor("FAC103", "Emily", "Davis", "Female", "Chemistry", "555-201-1003"),
        tutor("FAC104", "David", "Wilson", "Male", "Physics", "555-201-1004"),
        tutor("FAC105", "Jessica", "Lee", "Female", "Chemistry", "555-201-1005"),
        tutor("FAC106", "Chris", "Taylor", "Male", "Literature", "555-201-1006"),
        tutor("FAC107", "Alex", "Morgan", "Other", "History", "555-201-1007"),
    ];
    roster[0].date_of_birth = Some("1980-04-12".to_string());
    roster[0].availability = vec![
        slot(&["Mon", "Tue", "Wed"], "08:00", "12:00"),
        slot(&["Fri"], "14:00", "17:00"),
    ];
    roster[1].availability = vec![slot(&["Tue", "Thu"], "09:00", "13:00")];
    roster[3].availability = vec![slot(&["Tue", "Thu"], "14:00", "18:00")];
    roster
}

fn notification(
    id: &str,
    sender: (&str, UserRole, &str),
    receiver: (&str, UserRole),
    message: &str,
    timestamp: &str,
    is_read: bool,
) -> Notification {
    let (sender_name, sender_role, sender_id) = sender;
    let (receiver_name, receiver_role) = receiver;
    Notification {
        id: id.to_string(),
        sender_name: sender_name.to_string(),
        sender_role,
        sender_id: sender_id.to_string(),
        receiver_name: receiver_name.to_string(),
        receiver_role,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        course_code: sender_id.to_string(),
        is_read,
    }
}

/// Three unread then three older notifications, newest first.
pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "n1",
            ("Michael Jones", UserRole::Tutor, "MAT101"),
            ("Alice Smith", UserRole::Student),
            "Please submit your assignment by tomorrow.",
            "5 minutes ago",
            false,
        ),
        notification(
            "n2",
            ("Bob Johnson", UserRole::Student, "STU102"),
            ("Sarah Smith", UserRole::Tutor),
            "I have a question about the last lecture.",
            "1 hour ago",
            false,
        ),
        notification(
            "n3",
            ("Emily Davis", UserRole::Tutor, "CHE101"),
            ("Charlie Brown", UserRole::Student),
            "Your project proposal has been approved. Great work!",
            "3 hours ago",
            false,
        ),
        notification(
            "n4",
            ("Alice Smith", UserRole::Student, "STU101"),
            ("Michael Jones", UserRole::Tutor),
            "Thank you for the extension on the assignment.",
            "1 day ago",
            true,
        ),
        notification(
            "n5",
            ("David Wilson", UserRole::Tutor, "PHY103"),
            ("Diana Prince", UserRole::Student),
            "Reminder: The midterm exam is next week.",
            "3 days ago",
            true,
        ),
        notification(
            "n6",
            ("System Admin", UserRole::Admin, "SYS-01"),
            ("All Tutors", UserRole::Group),
            "System maintenance is scheduled for this weekend.",
            "1 week ago",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_courses_respect_progress_bound() {
        for course in courses() {
            assert!(course.completed <= course.planned, "{}", course.id);
        }
    }

    #[test]
    fn seed_enrolments_point_at_seed_courses() {
        let ids: Vec<String> = courses().into_iter().map(|c| c.id).collect();
        let dates = enrollment_dates();
        for student in students() {
            for id in &student.enrolled_course_ids {
                assert!(ids.contains(id), "{} -> {}", student.id, id);
                assert!(dates.contains_key(id));
            }
        }
    }

    #[test]
    fn course_faculty_are_on_the_roster() {
        let names: Vec<String> = faculty().iter().map(Faculty::full_name).collect();
        for course in courses() {
            assert!(names.contains(&course.faculty), "{}", course.faculty);
        }
    }
}
