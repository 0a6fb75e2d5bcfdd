//! Modal form lifecycle: open, edit, validate, submit, reset.
//!
//! A `FormState<D>` wraps a draft `D` and walks it through
//! `Closed -> Editing -> (Invalid ->)* Closed`. A valid submit hands the
//! draft out exactly once and leaves the form closed and empty, so a second
//! submit of the same click can never reach the repository.

pub mod course;
pub mod enrollment;
pub mod faculty;
pub mod student;

use std::collections::BTreeMap;

use log::debug;

/// Editable form contents.
pub trait Draft: Clone + PartialEq + Default {
    fn validate(&self) -> FieldErrors;
}

/// Validation messages keyed by field name, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Records `message` under `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Editing,
    /// The last submit failed validation. The form stays open.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D: Draft> {
    phase: FormPhase,
    mode: FormMode,
    draft: D,
    seed: D,
    errors: FieldErrors,
}

impl<D: Draft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Closed,
            mode: FormMode::Create,
            draft: D::default(),
            seed: D::default(),
            errors: FieldErrors::default(),
        }
    }
}

impl<D: Draft> FormState<D> {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// True when the draft differs from what the form was opened with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.seed
    }

    pub fn open_create(&mut self) {
        self.open(FormMode::Create, D::default());
    }

    pub fn open_edit(&mut self, initial: D) {
        self.open(FormMode::Edit, initial);
    }

    /// Re-seeds an open edit form when the record behind it changed.
    ///
    /// Returns true when the draft was replaced. Closed or create forms are
    /// left alone.
    pub fn sync_initial(&mut self, initial: &D) -> bool {
        if !self.is_open() || self.mode != FormMode::Edit || *initial == self.seed {
            return false;
        }
        self.open(FormMode::Edit, initial.clone());
        true
    }

    /// Applies `f` to the draft and clears `field`'s error.
    pub fn edit(&mut self, field: &str, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
        self.errors.remove(field);
    }

    /// Validates the draft. On success returns it and resets the form; on
    /// failure keeps it open with the errors set.
    pub fn submit(&mut self) -> Option<D> {
        if !self.is_open() {
            return None;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            debug!("form submit rejected with {} error(s)", errors.len());
            self.errors = errors;
            self.phase = FormPhase::Invalid;
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        self.reset();
        Some(draft)
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn open(&mut self, mode: FormMode, initial: D) {
        self.phase = FormPhase::Editing;
        self.mode = mode;
        self.draft = initial.clone();
        self.seed = initial;
        self.errors = FieldErrors::default();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameDraft {
        name: String,
        note: String,
    }

    impl Draft for NameDraft {
        fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            errors.require("name", &self.name, "Name is required");
            errors
        }
    }

    fn named(name: &str) -> NameDraft {
        NameDraft {
            name: name.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn empty_required_field_keeps_form_open() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_create();
        assert_eq!(form.submit(), None);
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.error("name"), Some("Name is required"));
        assert!(form.is_open());
    }

    #[test]
    fn valid_submit_yields_draft_once_and_resets() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_create();
        form.edit("name", |d| d.name = "Algebra".to_string());

        assert_eq!(form.submit(), Some(named("Algebra")));
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.draft(), &NameDraft::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_create();
        form.submit();
        form.edit("note", |d| d.note = "x".to_string());
        assert_eq!(form.error("name"), Some("Name is required"));
        form.edit("name", |d| d.name = "a".to_string());
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_edit(named("   "));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn cancel_discards_draft_and_errors() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_edit(named("Biology"));
        form.edit("name", |d| d.name.clear());
        form.submit();
        form.cancel();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn sync_initial_reseeds_on_new_record_only() {
        let mut form: FormState<NameDraft> = FormState::default();
        assert!(!form.sync_initial(&named("Biology")));

        form.open_edit(named("Biology"));
        form.edit("note", |d| d.note = "draft".to_string());
        assert!(form.is_dirty());

        assert!(!form.sync_initial(&named("Biology")));
        assert_eq!(form.draft().note, "draft");

        assert!(form.sync_initial(&named("Chemistry")));
        assert_eq!(form.draft(), &named("Chemistry"));
        assert!(!form.is_dirty());
    }

    #[test]
    fn create_form_ignores_sync() {
        let mut form: FormState<NameDraft> = FormState::default();
        form.open_create();
        assert!(!form.sync_initial(&named("Biology")));
        assert_eq!(form.draft(), &NameDraft::default());
    }
}
