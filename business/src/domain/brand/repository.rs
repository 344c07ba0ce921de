use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::brand::model::{Brand, BrandSummary};
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// All brands with their product counts, ordered by name.
    async fn get_all(&self) -> Result<Vec<BrandSummary>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<BrandSummary, RepositoryError>;
    async fn save(&self, brand: &Brand) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
    async fn tax_id_exists(
        &self,
        tax_id: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
}
