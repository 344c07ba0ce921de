use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Vec<ProductDetails>, ProductError> {
        authorize(&params.principal, Action::Read, Resource::Product, &[])?;
        self.logger.debug("Listing products");
        let products = self.repository.get_all(&params.filter).await?;
        Ok(products)
    }
}
