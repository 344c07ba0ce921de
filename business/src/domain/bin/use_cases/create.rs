use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;

pub struct CreateBinParams {
    pub principal: Principal,
    pub code: String,
    pub sector_id: Uuid,
    pub product_id: Option<Uuid>,
    pub quantity: u32,
}

#[async_trait]
pub trait CreateBinUseCase: Send + Sync {
    async fn execute(&self, params: CreateBinParams) -> Result<BinDetails, BinError>;
}
