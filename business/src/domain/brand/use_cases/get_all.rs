use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::BrandSummary;

pub struct GetAllBrandsParams {
    pub principal: Principal,
}

#[async_trait]
pub trait GetAllBrandsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllBrandsParams) -> Result<Vec<BrandSummary>, BrandError>;
}
