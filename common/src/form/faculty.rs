use super::{Draft, FieldErrors};
use crate::model::faculty::{AvailabilitySlot, Faculty, FacultyPatch, NewFaculty};

/// Toast shown when a faculty form is submitted with missing fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

pub const NO_VALID_SLOT_MESSAGE: &str = "Please add at least one valid availability slot";

/// Create/edit faculty form. Optional fields are blank strings here and
/// become `None` on the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacultyDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub subject: String,
}

impl Draft for FacultyDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("mobile", &self.mobile, "Mobile number is required");
        errors.require("subject", &self.subject, "Subject is required");
        errors
    }
}

impl From<&Faculty> for FacultyDraft {
    fn from(faculty: &Faculty) -> Self {
        FacultyDraft {
            first_name: faculty.first_name.clone(),
            last_name: faculty.last_name.clone().unwrap_or_default(),
            gender: faculty.gender.clone().unwrap_or_default(),
            date_of_birth: faculty.date_of_birth.clone().unwrap_or_default(),
            email: faculty.email.clone().unwrap_or_default(),
            mobile: faculty.mobile.clone(),
            subject: faculty.subject.clone(),
        }
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FacultyDraft {
    pub fn into_new_faculty(self) -> NewFaculty {
        NewFaculty {
            first_name: self.first_name,
            last_name: optional(self.last_name),
            gender: optional(self.gender),
            date_of_birth: optional(self.date_of_birth),
            email: optional(self.email),
            mobile: self.mobile,
            subject: self.subject,
        }
    }

    /// Blank optional fields clear the stored value.
    pub fn into_patch(self) -> FacultyPatch {
        FacultyPatch {
            first_name: Some(self.first_name),
            last_name: Some(optional(self.last_name)),
            gender: Some(optional(self.gender)),
            date_of_birth: Some(optional(self.date_of_birth)),
            email: Some(optional(self.email)),
            mobile: Some(self.mobile),
            subject: Some(self.subject),
            availability: None,
        }
    }
}

/// Weekly availability editor contents.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityDraft {
    pub slots: Vec<AvailabilitySlot>,
}

impl Default for AvailabilityDraft {
    fn default() -> Self {
        Self {
            slots: vec![AvailabilitySlot::default()],
        }
    }
}

impl Draft for AvailabilityDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !self.slots.iter().any(AvailabilitySlot::is_complete) {
            errors.insert("slots", NO_VALID_SLOT_MESSAGE);
        }
        errors
    }
}

impl AvailabilityDraft {
    /// Starts from the faculty's slots, or one empty slot when there are none.
    pub fn for_faculty(faculty: &Faculty) -> Self {
        if faculty.availability.is_empty() {
            Self::default()
        } else {
            Self {
                slots: faculty.availability.clone(),
            }
        }
    }

    pub fn add_slot(&mut self) {
        self.slots.push(AvailabilitySlot::default());
    }

    pub fn remove_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    /// Complete slots only; what gets stored on submit.
    pub fn valid_slots(self) -> Vec<AvailabilitySlot> {
        self.slots.into_iter().filter(|s| s.is_complete()).collect()
    }

    pub fn into_patch(self) -> FacultyPatch {
        FacultyPatch {
            availability: Some(self.valid_slots()),
            ..FacultyPatch::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    fn slot(days: &[&str], start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot {
            days: days.iter().map(|d| d.to_string()).collect(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn faculty_requires_first_name_mobile_subject() {
        let errors = FacultyDraft {
            last_name: "Smith".to_string(),
            ..FacultyDraft::default()
        }
        .validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("first_name").is_some());
        assert!(errors.get("mobile").is_some());
        assert!(errors.get("subject").is_some());
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let new = FacultyDraft {
            first_name: "Nina".to_string(),
            email: "  ".to_string(),
            gender: "Female".to_string(),
            mobile: "555-0100".to_string(),
            subject: "Art".to_string(),
            ..FacultyDraft::default()
        }
        .into_new_faculty();
        assert_eq!(new.email, None);
        assert_eq!(new.last_name, None);
        assert_eq!(new.gender.as_deref(), Some("Female"));
    }

    #[test]
    fn availability_starts_with_one_empty_slot() {
        let draft = AvailabilityDraft::for_faculty(&Faculty::default());
        assert_eq!(draft.slots, vec![AvailabilitySlot::default()]);
        assert_eq!(draft.validate().get("slots"), Some(NO_VALID_SLOT_MESSAGE));
    }

    #[test]
    fn submit_keeps_only_complete_slots() {
        let mut form: FormState<AvailabilityDraft> = FormState::default();
        form.open_edit(AvailabilityDraft::default());
        form.edit("slots", |d| {
            d.slots[0] = slot(&["Mon", "Wed"], "09:00", "12:00");
            d.add_slot();
            d.slots[1].toggle_day("Fri");
        });

        let draft = form.submit().unwrap();
        assert_eq!(
            draft.valid_slots(),
            vec![slot(&["Mon", "Wed"], "09:00", "12:00")]
        );
    }

    #[test]
    fn remove_slot_ignores_out_of_range() {
        let mut draft = AvailabilityDraft::default();
        draft.remove_slot(4);
        assert_eq!(draft.slots.len(), 1);
        draft.remove_slot(0);
        assert!(draft.slots.is_empty());
    }
}
