/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A row is still referenced by a protecting foreign key.
    #[error("repository.reference_protected")]
    ReferenceProtected,
    #[error("repository.database_error")]
    DatabaseError,
}
