/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A referenced parent row does not exist (foreign key violation).
    #[error("repository.reference_not_found")]
    ReferenceNotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn reference_not_found() -> Self {
        RepositoryError::ReferenceNotFound
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
