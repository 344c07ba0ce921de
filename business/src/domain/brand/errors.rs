use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::validation::ValidationError;

/// Brand errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BrandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("brand.not_found")]
    NotFound,
    #[error("brand.duplicated")]
    Duplicated,
    /// Deletion blocked because products still reference the brand.
    #[error("brand.in_use")]
    InUse,
    #[error("brand.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for BrandError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => BrandError::NotFound,
            RepositoryError::Duplicated => BrandError::Duplicated,
            RepositoryError::ReferenceProtected => BrandError::InUse,
            RepositoryError::DatabaseError => BrandError::Repository(err),
        }
    }
}
