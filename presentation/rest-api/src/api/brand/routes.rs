use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::brand::use_cases::create::{CreateBrandParams, CreateBrandUseCase};
use business::domain::brand::use_cases::delete::{DeleteBrandParams, DeleteBrandUseCase};
use business::domain::brand::use_cases::get_all::{GetAllBrandsParams, GetAllBrandsUseCase};
use business::domain::brand::use_cases::get_by_id::{GetBrandByIdParams, GetBrandByIdUseCase};
use business::domain::brand::use_cases::update::{UpdateBrandParams, UpdateBrandUseCase};

use crate::api::brand::dto::{BrandResponse, CreateBrandRequest, UpdateBrandRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;

pub struct BrandApi {
    create_use_case: Arc<dyn CreateBrandUseCase>,
    get_all_use_case: Arc<dyn GetAllBrandsUseCase>,
    get_by_id_use_case: Arc<dyn GetBrandByIdUseCase>,
    update_use_case: Arc<dyn UpdateBrandUseCase>,
    delete_use_case: Arc<dyn DeleteBrandUseCase>,
}

impl BrandApi {
    pub fn new(
        create_use_case: Arc<dyn CreateBrandUseCase>,
        get_all_use_case: Arc<dyn GetAllBrandsUseCase>,
        get_by_id_use_case: Arc<dyn GetBrandByIdUseCase>,
        update_use_case: Arc<dyn UpdateBrandUseCase>,
        delete_use_case: Arc<dyn DeleteBrandUseCase>,
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

/// Brand management API
///
/// Brands carry the supplier tax id; writes are staff-only.
#[OpenApi]
impl BrandApi {
    /// List all brands
    ///
    /// Returns every brand with its product count, ordered by name.
    #[oai(path = "/brands", method = "get", tag = "ApiTags::Brands")]
    async fn get_all_brands(&self, auth: Option<BearerAuth>) -> GetAllBrandsResponse {
        let params = GetAllBrandsParams {
            principal: principal_of(auth),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(brands) => {
                let responses: Vec<BrandResponse> = brands.into_iter().map(|b| b.into()).collect();
                GetAllBrandsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllBrandsResponse::Unauthorized(json),
                    _ => GetAllBrandsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new brand
    #[oai(path = "/brands", method = "post", tag = "ApiTags::Brands")]
    async fn create_brand(
        &self,
        auth: Option<BearerAuth>,
        body: Json<CreateBrandRequest>,
    ) -> CreateBrandResponse {
        let params = CreateBrandParams {
            principal: principal_of(auth),
            name: body.0.name,
            tax_id: body.0.tax_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(brand) => CreateBrandResponse::Created(Json(brand.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBrandResponse::BadRequest(json),
                    401 => CreateBrandResponse::Unauthorized(json),
                    403 => CreateBrandResponse::Forbidden(json),
                    409 => CreateBrandResponse::Conflict(json),
                    _ => CreateBrandResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a brand by ID
    #[oai(path = "/brands/:id", method = "get", tag = "ApiTags::Brands")]
    async fn get_brand_by_id(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> GetBrandByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetBrandByIdResponse::BadRequest(invalid_id("brand.invalid_id"));
            }
        };

        let params = GetBrandByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(brand) => GetBrandByIdResponse::Ok(Json(brand.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetBrandByIdResponse::Unauthorized(json),
                    404 => GetBrandByIdResponse::NotFound(json),
                    _ => GetBrandByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a brand
    #[oai(path = "/brands/:id", method = "put", tag = "ApiTags::Brands")]
    async fn replace_brand(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBrandRequest>,
    ) -> UpdateBrandResponse {
        self.run_update(auth, id, body).await
    }

    /// Update a brand
    ///
    /// The body carries the full field set; both verbs behave the same.
    #[oai(path = "/brands/:id", method = "patch", tag = "ApiTags::Brands")]
    async fn update_brand(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBrandRequest>,
    ) -> UpdateBrandResponse {
        self.run_update(auth, id, body).await
    }

    /// Delete a brand
    ///
    /// Rejected with 409 while any product still references the brand.
    #[oai(path = "/brands/:id", method = "delete", tag = "ApiTags::Brands")]
    async fn delete_brand(&self, auth: Option<BearerAuth>, id: Path<String>) -> DeleteBrandResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteBrandResponse::BadRequest(invalid_id("brand.invalid_id"));
            }
        };

        let params = DeleteBrandParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteBrandResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteBrandResponse::Unauthorized(json),
                    403 => DeleteBrandResponse::Forbidden(json),
                    404 => DeleteBrandResponse::NotFound(json),
                    409 => DeleteBrandResponse::Conflict(json),
                    _ => DeleteBrandResponse::InternalError(json),
                }
            }
        }
    }
}

impl BrandApi {
    async fn run_update(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBrandRequest>,
    ) -> UpdateBrandResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateBrandResponse::BadRequest(invalid_id("brand.invalid_id"));
            }
        };

        let params = UpdateBrandParams {
            principal: principal_of(auth),
            id: uuid,
            name: body.0.name,
            tax_id: body.0.tax_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(brand) => UpdateBrandResponse::Ok(Json(brand.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBrandResponse::BadRequest(json),
                    401 => UpdateBrandResponse::Unauthorized(json),
                    403 => UpdateBrandResponse::Forbidden(json),
                    404 => UpdateBrandResponse::NotFound(json),
                    409 => UpdateBrandResponse::Conflict(json),
                    _ => UpdateBrandResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllBrandsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BrandResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBrandResponse {
    #[oai(status = 201)]
    Created(Json<BrandResponse>),
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
pub enum GetBrandByIdResponse {
    #[oai(status = 200)]
    Ok(Json<BrandResponse>),
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
pub enum UpdateBrandResponse {
    #[oai(status = 200)]
    Ok(Json<BrandResponse>),
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
pub enum DeleteBrandResponse {
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
