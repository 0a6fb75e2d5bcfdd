use log::{info, warn};

use super::{Entity, Repository, RepositoryError};
use crate::list_view::query::derived_view;

/// Generates `"{prefix}{n}"` ids. `n` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    pub fn new(prefix: &'static str, start: u64) -> Self {
        Self {
            prefix,
            next: start,
        }
    }

    /// Next id for which `taken` is false.
    pub fn next_free(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = format!("{}{}", self.prefix, self.next);
            self.next += 1;
            if !taken(&id) {
                return id;
            }
        }
    }
}

/// A `Vec`-backed repository seeded at construction.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E: Entity> {
    records: Vec<E>,
    ids: IdSequence,
}

impl<E: Entity> InMemoryRepository<E> {
    /// The first generated id is `{prefix}{id_offset + seed.len()}`.
    pub fn new(seed: Vec<E>, id_offset: u64) -> Self {
        let start = id_offset + seed.len() as u64;
        Self {
            records: seed,
            ids: IdSequence::new(E::ID_PREFIX, start),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, RepositoryError> {
        self.records
            .iter()
            .position(|r| r.row_id() == id)
            .ok_or_else(|| {
                warn!("{} {} not found", E::KIND, id);
                RepositoryError::not_found(E::KIND, id)
            })
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn list(&self) -> &[E] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<E> {
        self.records.iter().find(|r| r.row_id() == id).cloned()
    }

    fn create(&mut self, new: E::New) -> E {
        let records = &self.records;
        let id = self
            .ids
            .next_free(|candidate| records.iter().any(|r| r.row_id() == candidate));
        let record = E::with_id(new, id);
        info!("created {} {}", E::KIND, record.row_id());
        self.records.push(record.clone());
        record
    }

    fn update(&mut self, id: &str, patch: E::Patch) -> Result<E, RepositoryError> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.apply(patch);
        info!("updated {} {}", E::KIND, id);
        Ok(record.clone())
    }

    fn delete(&mut self, id: &str) -> Result<E, RepositoryError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        info!("deleted {} {}", E::KIND, id);
        Ok(removed)
    }

    fn search(&self, query: &str, filters: &E::Filters) -> Vec<E> {
        derived_view(&self.records, query, filters)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::{Course, CoursePatch, CourseStudents, NewCourse};
    use crate::model::faculty::{Faculty, FacultyFilters, NewFaculty};
    use crate::seed;

    fn new_faculty(first_name: &str, subject: &str) -> NewFaculty {
        NewFaculty {
            first_name: first_name.to_string(),
            mobile: "555-0100".to_string(),
            subject: subject.to_string(),
            ..NewFaculty::default()
        }
    }

    #[test]
    fn first_faculty_id_follows_seed_length() {
        let seed = seed::faculty();
        let expected = format!("FAC{}", 101 + seed.len());
        let mut repo = InMemoryRepository::new(seed, 101);
        let created = repo.create(new_faculty("Nina", "Art"));
        assert_eq!(created.id, expected);
        assert!(created.availability.is_empty());
        assert_eq!(repo.get(&expected), Some(created));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut repo: InMemoryRepository<Faculty> = InMemoryRepository::new(Vec::new(), 101);
        let a = repo.create(new_faculty("A", "Art"));
        let b = repo.create(new_faculty("B", "Art"));
        assert_eq!(a.id, "FAC101");
        assert_eq!(b.id, "FAC102");

        repo.delete(&b.id).unwrap();
        let c = repo.create(new_faculty("C", "Art"));
        assert_eq!(c.id, "FAC103");

        let mut seen: Vec<&str> = repo.list().iter().map(|f| f.id.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), repo.len());
    }

    #[test]
    fn generated_id_skips_ids_already_present() {
        let taken = Faculty {
            id: "FAC101".to_string(),
            ..Faculty::default()
        };
        let mut repo = InMemoryRepository::new(vec![taken], 100);
        let created = repo.create(new_faculty("Nina", "Art"));
        assert_eq!(created.id, "FAC102");
    }

    #[test]
    fn update_patches_and_returns_record() {
        let mut repo = InMemoryRepository::new(seed::courses(), 101);
        let updated = repo
            .update(
                "MAT101",
                CoursePatch {
                    name: Some("Algebra".to_string()),
                    ..CoursePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Algebra");
        assert_eq!(updated.planned, 25);
        assert_eq!(repo.get("MAT101").map(|c| c.name), Some("Algebra".to_string()));
    }

    #[test]
    fn misses_report_not_found() {
        let mut repo = InMemoryRepository::new(seed::courses(), 101);
        assert_eq!(
            repo.update("NOPE", CoursePatch::default()),
            Err(RepositoryError::not_found("course", "NOPE"))
        );
        let err = repo.delete("NOPE").unwrap_err();
        assert_eq!(err.to_string(), "course NOPE not found");
        assert_eq!(repo.len(), 7);
    }

    #[test]
    fn created_course_starts_with_no_completed_hours() {
        let mut repo = InMemoryRepository::new(seed::courses(), 101);
        let course: Course = repo.create(NewCourse {
            name: "Art".to_string(),
            schedule: "Wed, Fri".to_string(),
            time_slot: "14:00-16:00".to_string(),
            faculty: "Chris Taylor".to_string(),
            students: CourseStudents::Count(0),
            planned: 20,
        });
        assert_eq!(course.id, "CRS108");
        assert_eq!(course.completed, 0);
        assert_eq!(repo.list().last(), Some(&course));
    }

    #[test]
    fn search_uses_list_view_rules() {
        let repo = InMemoryRepository::new(seed::faculty(), 101);
        let mut filters = FacultyFilters::default();
        filters.toggle_subject("Chemistry");
        let found = repo.search("", &filters);
        assert!(!found.is_empty());
        assert!(found.iter().all(|f| f.subject == "Chemistry"));
        assert_eq!(repo.search("zzz", &FacultyFilters::default()), Vec::new());
    }
}
