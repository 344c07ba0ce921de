use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::get_empty::{GetEmptyBinsParams, GetEmptyBinsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::page::Page;

pub struct GetEmptyBinsUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetEmptyBinsUseCase for GetEmptyBinsUseCaseImpl {
    async fn execute(&self, params: GetEmptyBinsParams) -> Result<Page<BinDetails>, BinError> {
        authorize(&params.principal, Action::Read, Resource::Bin, &[])?;
        self.logger
            .debug(&format!("Listing empty bins, page {}", params.page.page()));
        let page = self.repository.get_empty(params.page).await?;
        Ok(page)
    }
}
