use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        authorize(&params.principal, Action::Delete, Resource::Category, &[])?;
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.repository.get_by_id(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}
