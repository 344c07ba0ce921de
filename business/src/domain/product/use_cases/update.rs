use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;

/// Partial update. `None` leaves a field as it is, so the same use case
/// backs both full and partial update endpoints.
pub struct UpdateProductParams {
    pub principal: Principal,
    pub id: Uuid,
    pub name: Option<String>,
    pub registration_code: Option<String>,
    pub barcode: Option<String>,
    pub category_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
    pub cost: Option<BigDecimal>,
    pub sell_price: Option<BigDecimal>,
    pub additional_info: Option<String>,
    pub on_promotion: Option<bool>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<ProductDetails, ProductError>;
}
