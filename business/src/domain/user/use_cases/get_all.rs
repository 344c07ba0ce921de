use async_trait::async_trait;

use crate::domain::auth::model::Principal;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetAllUsersParams {
    pub principal: Principal,
}

#[async_trait]
pub trait GetAllUsersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllUsersParams) -> Result<Vec<User>, UserError>;
}
