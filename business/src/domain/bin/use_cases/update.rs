use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;

/// Full replacement of the mutable fields. `product_id: None` empties
/// the bin on purpose rather than meaning "leave unchanged".
pub struct UpdateBinParams {
    pub principal: Principal,
    pub id: Uuid,
    pub code: String,
    pub sector_id: Uuid,
    pub product_id: Option<Uuid>,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateBinUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBinParams) -> Result<BinDetails, BinError>;
}
