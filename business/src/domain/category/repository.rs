use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::model::{Category, CategorySummary};
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories with their product counts, ordered by name.
    async fn get_all(&self) -> Result<Vec<CategorySummary>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CategorySummary, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// True when another category already uses the name. `exclude` skips
    /// the row being updated.
    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
}
