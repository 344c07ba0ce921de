use uuid::Uuid;

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub is_staff: bool,
}

/// The caller of a use case. Every operation receives one, so access
/// decisions happen in the domain rather than in the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Known(AuthUser),
}

impl Principal {
    pub fn known(id: Uuid, username: impl Into<String>, is_staff: bool) -> Self {
        Principal::Known(AuthUser {
            id,
            username: username.into(),
            is_staff,
        })
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Principal::Known(user) if user.is_staff)
    }
}
