use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::get_all::{GetAllBinsParams, GetAllBinsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllBinsUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBinsUseCase for GetAllBinsUseCaseImpl {
    async fn execute(&self, params: GetAllBinsParams) -> Result<Vec<BinDetails>, BinError> {
        authorize(&params.principal, Action::Read, Resource::Bin, &[])?;
        self.logger.debug("Listing bins");
        let bins = self.repository.get_all(&params.filter).await?;
        Ok(bins)
    }
}
