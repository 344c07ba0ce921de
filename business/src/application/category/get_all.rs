use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::CategorySummary;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::{GetAllCategoriesParams, GetAllCategoriesUseCase};
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Vec<CategorySummary>, CategoryError> {
        authorize(&params.principal, Action::Read, Resource::Category, &[])?;
        self.logger.debug("Listing categories");

        Ok(self.repository.get_all().await?)
    }
}
