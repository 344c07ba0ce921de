use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::validation::ValidationError;

/// Category errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("category.not_found")]
    NotFound,
    #[error("category.duplicated")]
    Duplicated,
    /// Deletion blocked because products still reference the category.
    #[error("category.in_use")]
    InUse,
    #[error("category.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CategoryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CategoryError::NotFound,
            RepositoryError::Duplicated => CategoryError::Duplicated,
            RepositoryError::ReferenceProtected => CategoryError::InUse,
            RepositoryError::DatabaseError => CategoryError::Repository(err),
        }
    }
}
