use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bin::model::{Bin, BinDetails, BinFilter};
use crate::domain::errors::RepositoryError;
use crate::domain::shared::page::{Page, PageRequest};

#[async_trait]
pub trait BinRepository: Send + Sync {
    /// Matching bins ordered by sector letter, then code.
    async fn get_all(&self, filter: &BinFilter) -> Result<Vec<BinDetails>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<BinDetails, RepositoryError>;
    async fn save(&self, bin: &Bin) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Bins with no product assigned at all.
    async fn get_empty(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError>;
    /// Bins holding a product with at least one unit.
    async fn get_occupied(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError>;
    /// True when the sector already has a bin with this code. `exclude`
    /// skips the row being updated.
    async fn code_exists_in_sector(
        &self,
        sector_id: Uuid,
        code: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
}
