use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;

pub struct CreateProductParams {
    pub principal: Principal,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_id: Uuid,
    pub brand_id: Uuid,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub additional_info: Option<String>,
    pub on_promotion: bool,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductDetails, ProductError>;
}
