use uuid::Uuid;

/// Account mirrored from the identity provider. This API only reads
/// users; provisioning happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}
