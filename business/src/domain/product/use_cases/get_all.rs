use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::ProductDetails;

pub struct GetAllProductsParams {
    pub principal: Principal,
    pub filter: ProductFilter,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams)
    -> Result<Vec<ProductDetails>, ProductError>;
}
