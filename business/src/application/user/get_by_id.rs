use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError> {
        authorize(&params.principal, Action::Read, Resource::User, &[])?;
        self.logger.debug(&format!("Fetching user: {}", params.id));
        let user = self.repository.get_by_id(params.id).await?;
        Ok(user)
    }
}
