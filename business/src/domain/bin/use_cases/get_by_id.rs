use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;

pub struct GetBinByIdParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait GetBinByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBinByIdParams) -> Result<BinDetails, BinError>;
}
