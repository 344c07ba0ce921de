use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::sector::errors::SectorError;

pub struct DeleteSectorParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteSectorUseCase: Send + Sync {
    async fn execute(&self, params: DeleteSectorParams) -> Result<(), SectorError>;
}
