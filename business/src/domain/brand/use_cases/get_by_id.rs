use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::BrandSummary;

pub struct GetBrandByIdParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait GetBrandByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBrandByIdParams) -> Result<BrandSummary, BrandError>;
}
