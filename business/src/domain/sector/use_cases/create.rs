use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::Sector;

pub struct CreateSectorParams {
    pub principal: Principal,
    pub letter: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateSectorUseCase: Send + Sync {
    async fn execute(&self, params: CreateSectorParams) -> Result<Sector, SectorError>;
}
