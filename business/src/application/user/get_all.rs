use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self, params: GetAllUsersParams) -> Result<Vec<User>, UserError> {
        authorize(&params.principal, Action::Read, Resource::User, &[])?;
        self.logger.debug("Listing users");
        let users = self.repository.get_all().await?;
        Ok(users)
    }
}
