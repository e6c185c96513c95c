/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint (username, email, basket owner) rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    /// A stored document could not be mapped back into the domain model.
    #[error("repository.corrupted_document")]
    CorruptedDocument,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn corrupted_document() -> Self {
        RepositoryError::CorruptedDocument
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
