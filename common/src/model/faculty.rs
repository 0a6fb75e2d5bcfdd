use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::list_view::query::{FilterSet, ListRow};
use crate::repository::Entity;

/// Weekdays offered by the availability editor, in display order.
pub const DAY_OPTIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// A tutor on the faculty roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub mobile: String,
    pub subject: String,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

/// One weekly availability window, e.g. Mon/Wed 09:00-12:00.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilitySlot {
    /// A slot counts only once it has at least one day and both times.
    pub fn is_complete(&self) -> bool {
        !self.days.is_empty() && !self.start_time.is_empty() && !self.end_time.is_empty()
    }

    pub fn toggle_day(&mut self, day: &str) {
        if let Some(pos) = self.days.iter().position(|d| d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day.to_string());
            self.days.sort_by_key(|d| day_rank(d));
        }
    }
}

fn day_rank(day: &str) -> usize {
    DAY_OPTIONS
        .iter()
        .position(|o| *o == day)
        .unwrap_or(DAY_OPTIONS.len())
}

impl Faculty {
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().filter(|l| !l.is_empty()) {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// Subject multi-select: a faculty member matches when their subject is
/// one of the selected ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacultyFilters {
    pub subjects: BTreeSet<String>,
}

impl FacultyFilters {
    /// Adds `subject` to the selection, or removes it if already selected.
    pub fn toggle_subject(&mut self, subject: &str) {
        if !self.subjects.remove(subject) {
            self.subjects.insert(subject.to_string());
        }
    }
}

impl FilterSet<Faculty> for FacultyFilters {
    fn matches(&self, faculty: &Faculty) -> bool {
        self.subjects.is_empty() || self.subjects.contains(&faculty.subject)
    }

    fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl ListRow for Faculty {
    type Filters = FacultyFilters;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.first_name.as_str()];
        if let Some(last) = &self.last_name {
            fields.push(last);
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFaculty {
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub mobile: String,
    pub subject: String,
}

/// Partial update. The optional profile fields take `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacultyPatch {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub gender: Option<Option<String>>,
    pub date_of_birth: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub mobile: Option<String>,
    pub subject: Option<String>,
    pub availability: Option<Vec<AvailabilitySlot>>,
}

impl Entity for Faculty {
    const KIND: &'static str = "faculty";
    const ID_PREFIX: &'static str = "FAC";
    type New = NewFaculty;
    type Patch = FacultyPatch;

    fn with_id(new: NewFaculty, id: String) -> Self {
        Faculty {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            gender: new.gender,
            date_of_birth: new.date_of_birth,
            email: new.email,
            mobile: new.mobile,
            subject: new.subject,
            availability: Vec::new(),
        }
    }

    fn apply(&mut self, patch: FacultyPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(mobile) = patch.mobile {
            self.mobile = mobile;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_missing_last_name() {
        let mut faculty = Faculty {
            first_name: "Sarah".to_string(),
            ..Faculty::default()
        };
        assert_eq!(faculty.full_name(), "Sarah");
        faculty.last_name = Some("Smith".to_string());
        assert_eq!(faculty.full_name(), "Sarah Smith");
    }

    #[test]
    fn search_fields_include_last_name() {
        let faculty = Faculty {
            first_name: "Emily".to_string(),
            last_name: Some("Davis".to_string()),
            ..Faculty::default()
        };
        assert_eq!(faculty.search_fields(), vec!["Emily", "Davis"]);
    }

    #[test]
    fn toggle_day_keeps_week_order() {
        let mut slot = AvailabilitySlot::default();
        slot.toggle_day("Fri");
        slot.toggle_day("Mon");
        assert_eq!(slot.days, vec!["Mon", "Fri"]);
        slot.toggle_day("Fri");
        assert_eq!(slot.days, vec!["Mon"]);
        assert!(!slot.is_complete());
    }

    #[test]
    fn patch_can_clear_optional_fields() {
        let mut faculty = Faculty {
            email: Some("old@example.com".to_string()),
            ..Faculty::default()
        };
        faculty.apply(FacultyPatch {
            email: Some(None),
            ..FacultyPatch::default()
        });
        assert_eq!(faculty.email, None);
    }
}
