use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::user::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All accounts ordered by username.
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError>;
}
