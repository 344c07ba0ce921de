use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct UserApi {
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// User directory API
///
/// Read-only; accounts are provisioned outside this service.
#[OpenApi]
impl UserApi {
    /// List all users
    ///
    /// Returns every account ordered by username.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self, auth: Option<BearerAuth>) -> GetAllUsersResponse {
        let params = GetAllUsersParams {
            principal: principal_of(auth),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(users) => {
                let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
                GetAllUsersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllUsersResponse::Unauthorized(json),
                    _ => GetAllUsersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user by ID
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> GetUserByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetUserByIdResponse::BadRequest(invalid_id("user.invalid_id"));
            }
        };

        let params = GetUserByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetUserByIdResponse::Unauthorized(json),
                    404 => GetUserByIdResponse::NotFound(json),
                    _ => GetUserByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
