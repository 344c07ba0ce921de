use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::SectorSummary;

pub struct UpdateSectorParams {
    pub principal: Principal,
    pub id: Uuid,
    pub letter: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateSectorUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSectorParams) -> Result<SectorSummary, SectorError>;
}
