use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;

/// User errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("user.not_found")]
    NotFound,
    #[error("user.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => UserError::NotFound,
            _ => UserError::Repository(err),
        }
    }
}
