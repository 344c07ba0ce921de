/// Access errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("auth.forbidden: {0}")]
    Forbidden(String),
}
