use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::bin::model::BinFilter;
use business::domain::bin::use_cases::create::{CreateBinParams, CreateBinUseCase};
use business::domain::bin::use_cases::delete::{DeleteBinParams, DeleteBinUseCase};
use business::domain::bin::use_cases::get_all::{GetAllBinsParams, GetAllBinsUseCase};
use business::domain::bin::use_cases::get_by_id::{GetBinByIdParams, GetBinByIdUseCase};
use business::domain::bin::use_cases::get_empty::{GetEmptyBinsParams, GetEmptyBinsUseCase};
use business::domain::bin::use_cases::get_occupied::{
    GetOccupiedBinsParams, GetOccupiedBinsUseCase,
};
use business::domain::bin::use_cases::update::{UpdateBinParams, UpdateBinUseCase};
use business::domain::shared::page::PageRequest;

use crate::api::bin::dto::{
    BinResponse, CreateBinRequest, PaginatedBinsResponse, UpdateBinRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;

pub struct BinApi {
    create_use_case: Arc<dyn CreateBinUseCase>,
    get_all_use_case: Arc<dyn GetAllBinsUseCase>,
    get_by_id_use_case: Arc<dyn GetBinByIdUseCase>,
    update_use_case: Arc<dyn UpdateBinUseCase>,
    delete_use_case: Arc<dyn DeleteBinUseCase>,
    get_empty_use_case: Arc<dyn GetEmptyBinsUseCase>,
    get_occupied_use_case: Arc<dyn GetOccupiedBinsUseCase>,
}

impl BinApi {
    pub fn new(
        create_use_case: Arc<dyn CreateBinUseCase>,
        get_all_use_case: Arc<dyn GetAllBinsUseCase>,
        get_by_id_use_case: Arc<dyn GetBinByIdUseCase>,
        update_use_case: Arc<dyn UpdateBinUseCase>,
        delete_use_case: Arc<dyn DeleteBinUseCase>,
        get_empty_use_case: Arc<dyn GetEmptyBinsUseCase>,
        get_occupied_use_case: Arc<dyn GetOccupiedBinsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            get_empty_use_case,
            get_occupied_use_case,
        }
    }
}

/// Bin management API
///
/// Bins are the physical slots; each belongs to a sector and holds at
/// most one product.
#[OpenApi]
impl BinApi {
    /// List all bins
    ///
    /// Optionally filtered by sector letter or stored product, ordered
    /// by sector letter then code.
    #[oai(path = "/bins", method = "get", tag = "ApiTags::Bins")]
    async fn get_all_bins(
        &self,
        auth: Option<BearerAuth>,
        /// Case-insensitive sector letter
        sector: Query<Option<String>>,
        /// Only bins storing this product
        product_id: Query<Option<String>>,
    ) -> GetAllBinsResponse {
        let product_uuid = match product_id.0 {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return GetAllBinsResponse::BadRequest(invalid_id("bin.invalid_product_id"));
                }
            },
            None => None,
        };

        let params = GetAllBinsParams {
            principal: principal_of(auth),
            filter: BinFilter {
                sector_letter: sector.0,
                product_id: product_uuid,
            },
        };

        match self.get_all_use_case.execute(params).await {
            Ok(bins) => {
                let responses: Vec<BinResponse> = bins.into_iter().map(|b| b.into()).collect();
                GetAllBinsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllBinsResponse::Unauthorized(json),
                    _ => GetAllBinsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new bin
    ///
    /// The code must be free within the target sector; referenced
    /// sector and product must exist.
    #[oai(path = "/bins", method = "post", tag = "ApiTags::Bins")]
    async fn create_bin(
        &self,
        auth: Option<BearerAuth>,
        body: Json<CreateBinRequest>,
    ) -> CreateBinResponse {
        let sector_uuid = match Uuid::parse_str(&body.0.sector_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateBinResponse::BadRequest(invalid_id("bin.invalid_sector_id"));
            }
        };
        let product_uuid = match body.0.product_id {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return CreateBinResponse::BadRequest(invalid_id("bin.invalid_product_id"));
                }
            },
            None => None,
        };

        let params = CreateBinParams {
            principal: principal_of(auth),
            code: body.0.code,
            sector_id: sector_uuid,
            product_id: product_uuid,
            quantity: body.0.quantity.unwrap_or(0),
        };

        match self.create_use_case.execute(params).await {
            Ok(details) => CreateBinResponse::Created(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBinResponse::BadRequest(json),
                    401 => CreateBinResponse::Unauthorized(json),
                    403 => CreateBinResponse::Forbidden(json),
                    409 => CreateBinResponse::Conflict(json),
                    _ => CreateBinResponse::InternalError(json),
                }
            }
        }
    }

    /// List empty bins
    ///
    /// Bins with no product or a zero count, paginated.
    #[oai(path = "/bins/empty", method = "get", tag = "ApiTags::Bins")]
    async fn get_empty_bins(
        &self,
        auth: Option<BearerAuth>,
        page: Query<Option<u32>>,
        per_page: Query<Option<u32>>,
    ) -> GetBinPageResponse {
        let params = GetEmptyBinsParams {
            principal: principal_of(auth),
            page: PageRequest::new(page.0, per_page.0),
        };

        match self.get_empty_use_case.execute(params).await {
            Ok(page) => GetBinPageResponse::Ok(Json(PaginatedBinsResponse {
                count: page.total,
                results: page.items.into_iter().map(|b| b.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetBinPageResponse::Unauthorized(json),
                    _ => GetBinPageResponse::InternalError(json),
                }
            }
        }
    }

    /// List occupied bins
    ///
    /// Bins storing at least one unit of a product, paginated.
    #[oai(path = "/bins/occupied", method = "get", tag = "ApiTags::Bins")]
    async fn get_occupied_bins(
        &self,
        auth: Option<BearerAuth>,
        page: Query<Option<u32>>,
        per_page: Query<Option<u32>>,
    ) -> GetBinPageResponse {
        let params = GetOccupiedBinsParams {
            principal: principal_of(auth),
            page: PageRequest::new(page.0, per_page.0),
        };

        match self.get_occupied_use_case.execute(params).await {
            Ok(page) => GetBinPageResponse::Ok(Json(PaginatedBinsResponse {
                count: page.total,
                results: page.items.into_iter().map(|b| b.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetBinPageResponse::Unauthorized(json),
                    _ => GetBinPageResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a bin by ID
    #[oai(path = "/bins/:id", method = "get", tag = "ApiTags::Bins")]
    async fn get_bin_by_id(&self, auth: Option<BearerAuth>, id: Path<String>) -> GetBinByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetBinByIdResponse::BadRequest(invalid_id("bin.invalid_id"));
            }
        };

        let params = GetBinByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(details) => GetBinByIdResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetBinByIdResponse::Unauthorized(json),
                    404 => GetBinByIdResponse::NotFound(json),
                    _ => GetBinByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a bin
    ///
    /// Replaces code, sector, product and quantity. Omitting the
    /// product empties the bin.
    #[oai(path = "/bins/:id", method = "put", tag = "ApiTags::Bins")]
    async fn replace_bin(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBinRequest>,
    ) -> UpdateBinResponse {
        self.run_update(auth, id, body).await
    }

    /// Update a bin
    ///
    /// Same semantics as replacement: the body carries the full field
    /// set and omitting the product empties the bin.
    #[oai(path = "/bins/:id", method = "patch", tag = "ApiTags::Bins")]
    async fn update_bin(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBinRequest>,
    ) -> UpdateBinResponse {
        self.run_update(auth, id, body).await
    }

    /// Delete a bin
    ///
    /// Allowed even when stocked; the stored count disappears with it.
    #[oai(path = "/bins/:id", method = "delete", tag = "ApiTags::Bins")]
    async fn delete_bin(&self, auth: Option<BearerAuth>, id: Path<String>) -> DeleteBinResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteBinResponse::BadRequest(invalid_id("bin.invalid_id"));
            }
        };

        let params = DeleteBinParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteBinResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteBinResponse::Unauthorized(json),
                    403 => DeleteBinResponse::Forbidden(json),
                    404 => DeleteBinResponse::NotFound(json),
                    _ => DeleteBinResponse::InternalError(json),
                }
            }
        }
    }
}

impl BinApi {
    async fn run_update(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateBinRequest>,
    ) -> UpdateBinResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateBinResponse::BadRequest(invalid_id("bin.invalid_id"));
            }
        };
        let sector_uuid = match Uuid::parse_str(&body.0.sector_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateBinResponse::BadRequest(invalid_id("bin.invalid_sector_id"));
            }
        };
        let product_uuid = match body.0.product_id {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return UpdateBinResponse::BadRequest(invalid_id("bin.invalid_product_id"));
                }
            },
            None => None,
        };

        let params = UpdateBinParams {
            principal: principal_of(auth),
            id: uuid,
            code: body.0.code,
            sector_id: sector_uuid,
            product_id: product_uuid,
            quantity: body.0.quantity.unwrap_or(0),
        };

        match self.update_use_case.execute(params).await {
            Ok(details) => UpdateBinResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBinResponse::BadRequest(json),
                    401 => UpdateBinResponse::Unauthorized(json),
                    403 => UpdateBinResponse::Forbidden(json),
                    404 => UpdateBinResponse::NotFound(json),
                    409 => UpdateBinResponse::Conflict(json),
                    _ => UpdateBinResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllBinsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BinResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBinResponse {
    #[oai(status = 201)]
    Created(Json<BinResponse>),
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

/// Shared by the empty and occupied listings.
#[derive(poem_openapi::ApiResponse)]
pub enum GetBinPageResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedBinsResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBinByIdResponse {
    #[oai(status = 200)]
    Ok(Json<BinResponse>),
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
pub enum UpdateBinResponse {
    #[oai(status = 200)]
    Ok(Json<BinResponse>),
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
pub enum DeleteBinResponse {
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
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
