use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record of `kind` carries `id`.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

impl RepositoryError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        RepositoryError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
