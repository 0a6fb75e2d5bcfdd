use super::{Draft, FieldErrors};
use crate::model::student::{NewStudent, Student, StudentPatch};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub grade: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_mobile: String,
}

impl Draft for StudentDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Student name is required");
        errors
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        StudentDraft {
            name: student.name.clone(),
            grade: student.grade.clone(),
            date_of_birth: student.date_of_birth.clone(),
            email: student.email.clone(),
            mobile: student.mobile.clone(),
            parent_name: student.parent_name.clone(),
            parent_email: student.parent_email.clone(),
            parent_mobile: student.parent_mobile.clone(),
        }
    }
}

impl StudentDraft {
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name,
            grade: self.grade,
            date_of_birth: self.date_of_birth,
            email: self.email,
            mobile: self.mobile,
            parent_name: self.parent_name,
            parent_email: self.parent_email,
            parent_mobile: self.parent_mobile,
        }
    }

    /// Every form field overwrites the record. Enrolments are untouched.
    pub fn into_patch(self) -> StudentPatch {
        StudentPatch {
            name: Some(self.name),
            grade: Some(self.grade),
            date_of_birth: Some(self.date_of_birth),
            email: Some(self.email),
            mobile: Some(self.mobile),
            parent_name: Some(self.parent_name),
            parent_email: Some(self.parent_email),
            parent_mobile: Some(self.parent_mobile),
            enrolled_course_ids: None,
        }
    }
}
