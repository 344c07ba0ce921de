use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::Brand;

pub struct CreateBrandParams {
    pub principal: Principal,
    pub name: String,
    pub tax_id: String,
}

#[async_trait]
pub trait CreateBrandUseCase: Send + Sync {
    async fn execute(&self, params: CreateBrandParams) -> Result<Brand, BrandError>;
}
