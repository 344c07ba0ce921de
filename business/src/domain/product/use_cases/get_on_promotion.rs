use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;
use crate::domain::shared::page::{Page, PageRequest};

pub struct GetProductsOnPromotionParams {
    pub principal: Principal,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetProductsOnPromotionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsOnPromotionParams,
    ) -> Result<Page<ProductDetails>, ProductError>;
}
