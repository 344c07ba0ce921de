use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;

/// How many products the restock report shows.
pub const OLDEST_PRODUCTS_LIMIT: i64 = 10;

pub struct GetOldestProductsParams {
    pub principal: Principal,
}

#[async_trait]
pub trait GetOldestProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetOldestProductsParams,
    ) -> Result<Vec<ProductDetails>, ProductError>;
}
