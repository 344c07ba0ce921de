use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::sector::use_cases::create::{CreateSectorParams, CreateSectorUseCase};
use business::domain::sector::use_cases::delete::{DeleteSectorParams, DeleteSectorUseCase};
use business::domain::sector::use_cases::get_all::{GetAllSectorsParams, GetAllSectorsUseCase};
use business::domain::sector::use_cases::get_by_id::{GetSectorByIdParams, GetSectorByIdUseCase};
use business::domain::sector::use_cases::update::{UpdateSectorParams, UpdateSectorUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::sector::dto::{
    CreateSectorRequest, SectorDetailResponse, SectorResponse, UpdateSectorRequest,
};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;

pub struct SectorApi {
    create_use_case: Arc<dyn CreateSectorUseCase>,
    get_all_use_case: Arc<dyn GetAllSectorsUseCase>,
    get_by_id_use_case: Arc<dyn GetSectorByIdUseCase>,
    update_use_case: Arc<dyn UpdateSectorUseCase>,
    delete_use_case: Arc<dyn DeleteSectorUseCase>,
}

impl SectorApi {
    pub fn new(
        create_use_case: Arc<dyn CreateSectorUseCase>,
        get_all_use_case: Arc<dyn GetAllSectorsUseCase>,
        get_by_id_use_case: Arc<dyn GetSectorByIdUseCase>,
        update_use_case: Arc<dyn UpdateSectorUseCase>,
        delete_use_case: Arc<dyn DeleteSectorUseCase>,
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

/// Sector management API
///
/// Sectors are the warehouse aisles; deleting one removes its bins too.
#[OpenApi]
impl SectorApi {
    /// List all sectors
    ///
    /// Returns every sector with its bin count, ordered by letter.
    #[oai(path = "/sectors", method = "get", tag = "ApiTags::Sectors")]
    async fn get_all_sectors(&self, auth: Option<BearerAuth>) -> GetAllSectorsResponse {
        let params = GetAllSectorsParams {
            principal: principal_of(auth),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(sectors) => {
                let responses: Vec<SectorResponse> =
                    sectors.into_iter().map(|s| s.into()).collect();
                GetAllSectorsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllSectorsResponse::Unauthorized(json),
                    _ => GetAllSectorsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new sector
    #[oai(path = "/sectors", method = "post", tag = "ApiTags::Sectors")]
    async fn create_sector(
        &self,
        auth: Option<BearerAuth>,
        body: Json<CreateSectorRequest>,
    ) -> CreateSectorResponse {
        let params = CreateSectorParams {
            principal: principal_of(auth),
            letter: body.0.letter,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(sector) => CreateSectorResponse::Created(Json(sector.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateSectorResponse::BadRequest(json),
                    401 => CreateSectorResponse::Unauthorized(json),
                    403 => CreateSectorResponse::Forbidden(json),
                    409 => CreateSectorResponse::Conflict(json),
                    _ => CreateSectorResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a sector by ID
    ///
    /// The detail view embeds every bin in the sector, ordered by code.
    #[oai(path = "/sectors/:id", method = "get", tag = "ApiTags::Sectors")]
    async fn get_sector_by_id(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> GetSectorByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetSectorByIdResponse::BadRequest(invalid_id("sector.invalid_id"));
            }
        };

        let params = GetSectorByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(detail) => GetSectorByIdResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetSectorByIdResponse::Unauthorized(json),
                    404 => GetSectorByIdResponse::NotFound(json),
                    _ => GetSectorByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a sector
    #[oai(path = "/sectors/:id", method = "put", tag = "ApiTags::Sectors")]
    async fn replace_sector(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateSectorRequest>,
    ) -> UpdateSectorResponse {
        self.run_update(auth, id, body).await
    }

    /// Update a sector
    ///
    /// The body carries the full field set; both verbs behave the same.
    #[oai(path = "/sectors/:id", method = "patch", tag = "ApiTags::Sectors")]
    async fn update_sector(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateSectorRequest>,
    ) -> UpdateSectorResponse {
        self.run_update(auth, id, body).await
    }

    /// Delete a sector
    ///
    /// Every bin inside the sector is removed along with it.
    #[oai(path = "/sectors/:id", method = "delete", tag = "ApiTags::Sectors")]
    async fn delete_sector(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> DeleteSectorResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteSectorResponse::BadRequest(invalid_id("sector.invalid_id"));
            }
        };

        let params = DeleteSectorParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteSectorResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteSectorResponse::Unauthorized(json),
                    403 => DeleteSectorResponse::Forbidden(json),
                    404 => DeleteSectorResponse::NotFound(json),
                    _ => DeleteSectorResponse::InternalError(json),
                }
            }
        }
    }
}

impl SectorApi {
    async fn run_update(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateSectorRequest>,
    ) -> UpdateSectorResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateSectorResponse::BadRequest(invalid_id("sector.invalid_id"));
            }
        };

        let params = UpdateSectorParams {
            principal: principal_of(auth),
            id: uuid,
            letter: body.0.letter,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(summary) => UpdateSectorResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateSectorResponse::BadRequest(json),
                    401 => UpdateSectorResponse::Unauthorized(json),
                    403 => UpdateSectorResponse::Forbidden(json),
                    404 => UpdateSectorResponse::NotFound(json),
                    409 => UpdateSectorResponse::Conflict(json),
                    _ => UpdateSectorResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllSectorsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SectorResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSectorResponse {
    #[oai(status = 201)]
    Created(Json<SectorResponse>),
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
pub enum GetSectorByIdResponse {
    #[oai(status = 200)]
    Ok(Json<SectorDetailResponse>),
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
pub enum UpdateSectorResponse {
    #[oai(status = 200)]
    Ok(Json<SectorResponse>),
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
pub enum DeleteSectorResponse {
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
