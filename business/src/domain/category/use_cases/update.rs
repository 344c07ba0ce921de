use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::model::Principal;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::CategorySummary;

pub struct UpdateCategoryParams {
    pub principal: Principal,
    pub id: Uuid,
    pub name: String,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<CategorySummary, CategoryError>;
}
