//! Record storage behind a trait, so the pages never touch a concrete store.

mod error;
mod memory;

pub use error::RepositoryError;
pub use memory::{IdSequence, InMemoryRepository};

use crate::list_view::query::ListRow;

/// A record type a repository can create and patch.
pub trait Entity: ListRow {
    /// Lowercase name used in errors and logs.
    const KIND: &'static str;
    /// Prefix of generated ids, e.g. `"FAC"`.
    const ID_PREFIX: &'static str;

    /// Fields supplied on create, without an id.
    type New;
    /// Partial update. Unset fields are left untouched.
    type Patch;

    fn with_id(new: Self::New, id: String) -> Self;

    fn apply(&mut self, patch: Self::Patch);
}

pub trait Repository<E: Entity> {
    fn list(&self) -> &[E];

    fn get(&self, id: &str) -> Option<E>;

    fn create(&mut self, new: E::New) -> E;

    fn update(&mut self, id: &str, patch: E::Patch) -> Result<E, RepositoryError>;

    fn delete(&mut self, id: &str) -> Result<E, RepositoryError>;

    fn search(&self, query: &str, filters: &E::Filters) -> Vec<E>;
}
