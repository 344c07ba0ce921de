use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::SectorSummary;

pub struct GetAllSectorsParams {
    pub principal: Principal,
}

#[async_trait]
pub trait GetAllSectorsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllSectorsParams) -> Result<Vec<SectorSummary>, SectorError>;
}
