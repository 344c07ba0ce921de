use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_on_promotion::{
    GetProductsOnPromotionParams, GetProductsOnPromotionUseCase,
};
use crate::domain::shared::page::Page;

pub struct GetProductsOnPromotionUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsOnPromotionUseCase for GetProductsOnPromotionUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsOnPromotionParams,
    ) -> Result<Page<ProductDetails>, ProductError> {
        authorize(&params.principal, Action::Read, Resource::Product, &[])?;
        self.logger.debug(&format!(
            "Listing promoted products, page {}",
            params.page.page()
        ));
        let page = self.repository.get_on_promotion(params.page).await?;
        Ok(page)
    }
}
