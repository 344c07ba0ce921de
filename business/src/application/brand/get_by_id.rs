use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::BrandSummary;
use crate::domain::brand::repository::BrandRepository;
use crate::domain::brand::use_cases::get_by_id::{GetBrandByIdParams, GetBrandByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetBrandByIdUseCaseImpl {
    pub repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBrandByIdUseCase for GetBrandByIdUseCaseImpl {
    async fn execute(&self, params: GetBrandByIdParams) -> Result<BrandSummary, BrandError> {
        authorize(&params.principal, Action::Read, Resource::Brand, &[])?;
        self.logger.debug(&format!("Fetching brand: {}", params.id));

        Ok(self.repository.get_by_id(params.id).await?)
    }
}
