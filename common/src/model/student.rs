use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::list_view::query::{FilterSet, ListRow, active};
use crate::model::course::{Course, EnrolledCourse};
use crate::repository::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_mobile: String,
    /// Ids of the courses this student is enrolled in.
    #[serde(default)]
    pub enrolled_course_ids: Vec<String>,
}

impl Student {
    /// Joins `enrolled_course_ids` against `courses`.
    ///
    /// Order follows `courses`. Ids with no matching course are skipped, and
    /// `enrolled_on` holds the enrolment date for each course id.
    pub fn enrolled_courses(
        &self,
        courses: &[Course],
        enrolled_on: &BTreeMap<String, String>,
    ) -> Vec<EnrolledCourse> {
        courses
            .iter()
            .filter(|c| self.enrolled_course_ids.contains(&c.id))
            .map(|c| EnrolledCourse {
                course: c.clone(),
                enrolled_on: enrolled_on.get(&c.id).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilters {
    pub grade: Option<String>,
}

impl FilterSet<Student> for StudentFilters {
    fn matches(&self, student: &Student) -> bool {
        active(&self.grade).is_none_or(|grade| student.grade == grade)
    }

    fn is_empty(&self) -> bool {
        active(&self.grade).is_none()
    }
}

impl ListRow for Student {
    type Filters = StudentFilters;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.email.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub grade: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_mobile: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub parent_name: Option<String>,
    pub parent_email: Option<String>,
    pub parent_mobile: Option<String>,
    pub enrolled_course_ids: Option<Vec<String>>,
}

impl Entity for Student {
    const KIND: &'static str = "student";
    const ID_PREFIX: &'static str = "STU";
    type New = NewStudent;
    type Patch = StudentPatch;

    fn with_id(new: NewStudent, id: String) -> Self {
        Student {
            id,
            name: new.name,
            grade: new.grade,
            date_of_birth: new.date_of_birth,
            email: new.email,
            mobile: new.mobile,
            parent_name: new.parent_name,
            parent_email: new.parent_email,
            parent_mobile: new.parent_mobile,
            enrolled_course_ids: Vec::new(),
        }
    }

    fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
            name,
            grade,
            date_of_birth,
            email,
            mobile,
            parent_name,
            parent_email,
            parent_mobile,
            enrolled_course_ids,
        } = patch;

        set(&mut self.name, name);
        set(&mut self.grade, grade);
        set(&mut self.date_of_birth, date_of_birth);
        set(&mut self.email, email);
        set(&mut self.mobile, mobile);
        set(&mut self.parent_name, parent_name);
        set(&mut self.parent_email, parent_email);
        set(&mut self.parent_mobile, parent_mobile);
        set(&mut self.enrolled_course_ids, enrolled_course_ids);
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn enrolled_courses_follow_course_order() {
        let student = Student {
            enrolled_course_ids: vec!["CHE101".into(), "MAT101".into(), "NOPE".into()],
            ..Student::default()
        };
        let courses = seed::courses();
        let dates = seed::enrollment_dates();

        let enrolled = student.enrolled_courses(&courses, &dates);
        let ids: Vec<&str> = enrolled.iter().map(|e| e.course.id.as_str()).collect();
        assert_eq!(ids, vec!["MAT101", "CHE101"]);
        assert_eq!(enrolled[0].enrolled_on, "2024-01-15");
    }

    #[test]
    fn grade_filter_is_exact() {
        let filters = StudentFilters {
            grade: Some("1".to_string()),
        };
        let student = Student {
            grade: "10".to_string(),
            ..Student::default()
        };
        assert!(!filters.matches(&student));
    }
}
