use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::BrandSummary;

pub struct UpdateBrandParams {
    pub principal: Principal,
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
}

#[async_trait]
pub trait UpdateBrandUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBrandParams) -> Result<BrandSummary, BrandError>;
}
