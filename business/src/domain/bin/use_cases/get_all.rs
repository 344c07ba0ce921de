use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::{BinDetails, BinFilter};

pub struct GetAllBinsParams {
    pub principal: Principal,
    pub filter: BinFilter,
}

#[async_trait]
pub trait GetAllBinsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllBinsParams) -> Result<Vec<BinDetails>, BinError>;
}
