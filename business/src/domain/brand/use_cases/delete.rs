use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::brand::errors::BrandError;

pub struct DeleteBrandParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteBrandUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBrandParams) -> Result<(), BrandError>;
}
