use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        authorize(&params.principal, Action::Delete, Resource::Product, &[])?;
        self.logger.info(&format!("Deleting product: {}", params.id));

        // Bins pointing at this product are detached by the store and
        // keep whatever quantity they held.
        self.repository.get_summary(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
