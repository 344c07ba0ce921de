use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;

pub struct GetProductByIdParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductDetails, ProductError>;
}
