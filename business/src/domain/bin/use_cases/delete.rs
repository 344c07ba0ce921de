use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;

pub struct DeleteBinParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteBinUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBinParams) -> Result<(), BinError>;
}
