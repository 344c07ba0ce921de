use crate::domain::auth::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::validation::ValidationError;

/// Sector errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("sector.not_found")]
    NotFound,
    #[error("sector.duplicated")]
    Duplicated,
    #[error("sector.repository_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for SectorError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => SectorError::NotFound,
            RepositoryError::Duplicated => SectorError::Duplicated,
            // Sector deletion cascades to its bins, so a protected
            // reference here is a schema drift worth surfacing loudly.
            RepositoryError::ReferenceProtected | RepositoryError::DatabaseError => {
                SectorError::Repository(err)
            }
        }
    }
}
