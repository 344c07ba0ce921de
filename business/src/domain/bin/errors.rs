use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::validation::ValidationError;

/// Bin errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BinError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("bin.not_found")]
    NotFound,
    /// Another bin in the same sector already uses the code.
    #[error("bin.duplicated")]
    Duplicated,
    #[error("bin.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for BinError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => BinError::NotFound,
            RepositoryError::Duplicated => BinError::Duplicated,
            RepositoryError::ReferenceProtected | RepositoryError::DatabaseError => {
                BinError::Repository(err)
            }
        }
    }
}
