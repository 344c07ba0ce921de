use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;

pub struct TogglePromotionParams {
    pub principal: Principal,
    pub id: Uuid,
}

/// Outcome of a promotion flip: the refreshed product and a message that
/// always matches the state the flip produced.
#[derive(Debug)]
pub struct PromotionToggle {
    pub message: String,
    pub product: ProductDetails,
}

#[async_trait]
pub trait TogglePromotionUseCase: Send + Sync {
    async fn execute(&self, params: TogglePromotionParams)
    -> Result<PromotionToggle, ProductError>;
}
