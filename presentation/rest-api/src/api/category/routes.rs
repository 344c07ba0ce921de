use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
///
/// Categories group products for reporting; writes are staff-only.
#[OpenApi]
impl CategoryApi {
    /// List all categories
    ///
    /// Returns every category with its product count, ordered by name.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self, auth: Option<BearerAuth>) -> GetAllCategoriesResponse {
        let params = GetAllCategoriesParams {
            principal: principal_of(auth),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(categories) => {
                let responses: Vec<CategoryResponse> =
                    categories.into_iter().map(|c| c.into()).collect();
                GetAllCategoriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllCategoriesResponse::Unauthorized(json),
                    _ => GetAllCategoriesResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        auth: Option<BearerAuth>,
        body: Json<CreateCategoryRequest>,
    ) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            principal: principal_of(auth),
            name: body.0.name,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    401 => CreateCategoryResponse::Unauthorized(json),
                    403 => CreateCategoryResponse::Forbidden(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_id(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> GetCategoryByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetCategoryByIdResponse::BadRequest(invalid_id("category.invalid_id"));
            }
        };

        let params = GetCategoryByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(category) => GetCategoryByIdResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetCategoryByIdResponse::Unauthorized(json),
                    404 => GetCategoryByIdResponse::NotFound(json),
                    _ => GetCategoryByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn replace_category(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        self.run_update(auth, id, body).await
    }

    /// Update a category
    ///
    /// Same as replacement: the name is the only updatable field.
    #[oai(path = "/categories/:id", method = "patch", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        self.run_update(auth, id, body).await
    }

    /// Delete a category
    ///
    /// Rejected with 409 while any product still references the category.
    #[oai(
        path = "/categories/:id",
        method = "delete",
        tag = "ApiTags::Categories"
    )]
    async fn delete_category(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> DeleteCategoryResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteCategoryResponse::BadRequest(invalid_id("category.invalid_id"));
            }
        };

        let params = DeleteCategoryParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteCategoryResponse::Unauthorized(json),
                    403 => DeleteCategoryResponse::Forbidden(json),
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

impl CategoryApi {
    async fn run_update(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCategoryResponse::BadRequest(invalid_id("category.invalid_id"));
            }
        };

        let params = UpdateCategoryParams {
            principal: principal_of(auth),
            id: uuid,
            name: body.0.name,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    401 => UpdateCategoryResponse::Unauthorized(json),
                    403 => UpdateCategoryResponse::Forbidden(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
