use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::validation::ValidationError;

/// Product errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("product.not_found")]
    NotFound,
    #[error("product.duplicated")]
    Duplicated,
    #[error("product.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::Duplicated => ProductError::Duplicated,
            // Bins drop their product reference on delete instead of
            // protecting it, so a protected reference means schema drift.
            RepositoryError::ReferenceProtected | RepositoryError::DatabaseError => {
                ProductError::Repository(err)
            }
        }
    }
}
