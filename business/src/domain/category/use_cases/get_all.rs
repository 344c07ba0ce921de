use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::CategorySummary;

pub struct GetAllCategoriesParams {
    pub principal: Principal,
}

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCategoriesParams)
    -> Result<Vec<CategorySummary>, CategoryError>;
}
