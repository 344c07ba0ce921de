use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;
use crate::domain::shared::page::{Page, PageRequest};

pub struct GetEmptyBinsParams {
    pub principal: Principal,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetEmptyBinsUseCase: Send + Sync {
    async fn execute(&self, params: GetEmptyBinsParams) -> Result<Page<BinDetails>, BinError>;
}
