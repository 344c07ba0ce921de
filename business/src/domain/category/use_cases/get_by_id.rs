use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::CategorySummary;

pub struct GetCategoryByIdParams {
    pub principal: Principal,
    pub id: Uuid,
}

#[async_trait]
pub trait GetCategoryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryByIdParams)
    -> Result<CategorySummary, CategoryError>;
}
