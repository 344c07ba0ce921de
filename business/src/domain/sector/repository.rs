use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::sector::model::{Sector, SectorDetail, SectorSummary};

#[async_trait]
pub trait SectorRepository: Send + Sync {
    /// All sectors with bin counts, ordered by letter.
    async fn get_all(&self) -> Result<Vec<SectorSummary>, RepositoryError>;
    /// The bare sector row, used for existence checks and letter lookups.
    async fn get_by_id(&self, id: Uuid) -> Result<Sector, RepositoryError>;
    /// The sector with all of its bins embedded.
    async fn get_detail(&self, id: Uuid) -> Result<SectorDetail, RepositoryError>;
    async fn save(&self, sector: &Sector) -> Result<(), RepositoryError>;
    /// Removes the sector along with every bin inside it.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn letter_exists(
        &self,
        letter: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
}
