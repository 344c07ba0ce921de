use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::SectorDetail;

pub struct GetSectorByIdParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait GetSectorByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetSectorByIdParams) -> Result<SectorDetail, SectorError>;
}
