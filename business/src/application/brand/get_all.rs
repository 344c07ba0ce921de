use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::BrandSummary;
use crate::domain::brand::repository::BrandRepository;
use crate::domain::brand::use_cases::get_all::{GetAllBrandsParams, GetAllBrandsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllBrandsUseCaseImpl {
    pub repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBrandsUseCase for GetAllBrandsUseCaseImpl {
    async fn execute(&self, params: GetAllBrandsParams) -> Result<Vec<BrandSummary>, BrandError> {
        authorize(&params.principal, Action::Read, Resource::Brand, &[])?;
        self.logger.debug("Listing brands");

        Ok(self.repository.get_all().await?)
    }
}
