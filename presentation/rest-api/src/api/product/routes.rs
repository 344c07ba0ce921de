use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::filter::ProductFilter;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_oldest::{
    GetOldestProductsParams, GetOldestProductsUseCase,
};
use business::domain::product::use_cases::get_on_promotion::{
    GetProductsOnPromotionParams, GetProductsOnPromotionUseCase,
};
use business::domain::product::use_cases::toggle_promotion::{
    TogglePromotionParams, TogglePromotionUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::page::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_field, invalid_id};
use crate::api::product::dto::{
    CreateProductRequest, PaginatedProductsResponse, ProductResponse, PromotionToggleResponse,
    UpdateProductRequest,
};
use crate::api::security::{BearerAuth, principal_of};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    get_oldest_use_case: Arc<dyn GetOldestProductsUseCase>,
    get_on_promotion_use_case: Arc<dyn GetProductsOnPromotionUseCase>,
    toggle_promotion_use_case: Arc<dyn TogglePromotionUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        get_oldest_use_case: Arc<dyn GetOldestProductsUseCase>,
        get_on_promotion_use_case: Arc<dyn GetProductsOnPromotionUseCase>,
        toggle_promotion_use_case: Arc<dyn TogglePromotionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            get_oldest_use_case,
            get_on_promotion_use_case,
            toggle_promotion_use_case,
        }
    }
}

/// Product catalog API
///
/// Products sit at the center of the model; every response embeds the
/// category, the brand and the stocked locations.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// All filters are optional and combine with AND. Results are
    /// ordered newest first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    #[allow(clippy::too_many_arguments)]
    async fn get_all_products(
        &self,
        auth: Option<BearerAuth>,
        /// Substring match on the barcode
        barcode: Query<Option<String>>,
        /// Letter of a sector stocking the product, case-insensitive
        sector: Query<Option<String>>,
        /// Code of a bin stocking the product, case-insensitive
        bin_code: Query<Option<String>>,
        /// Substring match on the brand name
        brand: Query<Option<String>>,
        /// Substring match on the category name
        category: Query<Option<String>>,
        /// Only products with this promotion state
        on_promotion: Query<Option<bool>>,
        /// Lowest sell price to include, as a decimal string
        price_min: Query<Option<String>>,
        /// Highest sell price to include, as a decimal string
        price_max: Query<Option<String>>,
        /// First registration day to include
        date_from: Query<Option<NaiveDate>>,
        /// Last registration day to include
        date_to: Query<Option<NaiveDate>>,
    ) -> GetAllProductsResponse {
        let price_min = match parse_money(price_min.0, "price_min", "product.price_min_invalid") {
            Ok(value) => value,
            Err(json) => return GetAllProductsResponse::BadRequest(json),
        };
        let price_max = match parse_money(price_max.0, "price_max", "product.price_max_invalid") {
            Ok(value) => value,
            Err(json) => return GetAllProductsResponse::BadRequest(json),
        };

        let params = GetAllProductsParams {
            principal: principal_of(auth),
            filter: ProductFilter {
                barcode: barcode.0,
                sector_letter: sector.0,
                bin_code: bin_code.0,
                brand_name: brand.0,
                category_name: category.0,
                on_promotion: on_promotion.0,
                price_min,
                price_max,
                registered_from: date_from.0,
                registered_to: date_to.0,
            },
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllProductsResponse::Unauthorized(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// Registration code and barcode must be unique; category and brand
    /// must exist. Requires staff.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: Option<BearerAuth>,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let category_uuid = match Uuid::parse_str(&body.0.category_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateProductResponse::BadRequest(invalid_id(
                    "product.invalid_category_id",
                ));
            }
        };
        let brand_uuid = match Uuid::parse_str(&body.0.brand_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateProductResponse::BadRequest(invalid_id("product.invalid_brand_id"));
            }
        };
        let cost = match BigDecimal::from_str(&body.0.cost) {
            Ok(value) => value,
            Err(_) => {
                return CreateProductResponse::BadRequest(invalid_field(
                    "cost",
                    "product.cost_invalid",
                ));
            }
        };
        let sell_price = match BigDecimal::from_str(&body.0.sell_price) {
            Ok(value) => value,
            Err(_) => {
                return CreateProductResponse::BadRequest(invalid_field(
                    "sell_price",
                    "product.sell_price_invalid",
                ));
            }
        };

        let params = CreateProductParams {
            principal: principal_of(auth),
            name: body.0.name,
            registration_code: body.0.registration_code,
            barcode: body.0.barcode,
            category_id: category_uuid,
            brand_id: brand_uuid,
            cost,
            sell_price,
            additional_info: body.0.additional_info,
            on_promotion: body.0.on_promotion.unwrap_or(false),
        };

        match self.create_use_case.execute(params).await {
            Ok(details) => CreateProductResponse::Created(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    401 => CreateProductResponse::Unauthorized(json),
                    403 => CreateProductResponse::Forbidden(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List the oldest products
    ///
    /// Restock report: the ten longest-registered products, oldest
    /// first. The envelope matches the paginated listings but is never
    /// paged.
    #[oai(path = "/products/oldest", method = "get", tag = "ApiTags::Products")]
    async fn get_oldest_products(&self, auth: Option<BearerAuth>) -> GetProductPageResponse {
        let params = GetOldestProductsParams {
            principal: principal_of(auth),
        };

        match self.get_oldest_use_case.execute(params).await {
            Ok(products) => GetProductPageResponse::Ok(Json(PaginatedProductsResponse {
                count: products.len() as u64,
                results: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetProductPageResponse::Unauthorized(json),
                    _ => GetProductPageResponse::InternalError(json),
                }
            }
        }
    }

    /// List products on promotion
    ///
    /// Paginated, newest first.
    #[oai(
        path = "/products/on-promotion",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_on_promotion(
        &self,
        auth: Option<BearerAuth>,
        page: Query<Option<u32>>,
        per_page: Query<Option<u32>>,
    ) -> GetProductPageResponse {
        let params = GetProductsOnPromotionParams {
            principal: principal_of(auth),
            page: PageRequest::new(page.0, per_page.0),
        };

        match self.get_on_promotion_use_case.execute(params).await {
            Ok(page) => GetProductPageResponse::Ok(Json(PaginatedProductsResponse {
                count: page.total,
                results: page.items.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetProductPageResponse::Unauthorized(json),
                    _ => GetProductPageResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductByIdResponse::BadRequest(invalid_id("product.invalid_id"));
            }
        };

        let params = GetProductByIdParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(details) => GetProductByIdResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetProductByIdResponse::Unauthorized(json),
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Accepts the same body as the partial update; omitted fields keep
    /// their current value.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn replace_product(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        self.run_update(auth, id, body).await
    }

    /// Update a product
    ///
    /// Partial update: only the provided fields change.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        self.run_update(auth, id, body).await
    }

    /// Delete a product
    ///
    /// Bins stocking it are emptied of the reference but kept.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> DeleteProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteProductResponse::BadRequest(invalid_id("product.invalid_id"));
            }
        };

        let params = DeleteProductParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteProductResponse::Unauthorized(json),
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle the promotion flag
    ///
    /// Flips the current state and reports it in the message.
    #[oai(
        path = "/products/:id/toggle-promotion",
        method = "patch",
        tag = "ApiTags::Products"
    )]
    async fn toggle_promotion(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
    ) -> TogglePromotionResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return TogglePromotionResponse::BadRequest(invalid_id("product.invalid_id"));
            }
        };

        let params = TogglePromotionParams {
            principal: principal_of(auth),
            id: uuid,
        };

        match self.toggle_promotion_use_case.execute(params).await {
            Ok(toggle) => TogglePromotionResponse::Ok(Json(toggle.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => TogglePromotionResponse::Unauthorized(json),
                    403 => TogglePromotionResponse::Forbidden(json),
                    404 => TogglePromotionResponse::NotFound(json),
                    _ => TogglePromotionResponse::InternalError(json),
                }
            }
        }
    }
}

impl ProductApi {
    async fn run_update(
        &self,
        auth: Option<BearerAuth>,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProductResponse::BadRequest(invalid_id("product.invalid_id"));
            }
        };
        let category_uuid = match body.0.category_id {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return UpdateProductResponse::BadRequest(invalid_id(
                        "product.invalid_category_id",
                    ));
                }
            },
            None => None,
        };
        let brand_uuid = match body.0.brand_id {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return UpdateProductResponse::BadRequest(invalid_id(
                        "product.invalid_brand_id",
                    ));
                }
            },
            None => None,
        };
        let cost = match parse_money(body.0.cost, "cost", "product.cost_invalid") {
            Ok(value) => value,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };
        let sell_price = match parse_money(
            body.0.sell_price,
            "sell_price",
            "product.sell_price_invalid",
        ) {
            Ok(value) => value,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            principal: principal_of(auth),
            id: uuid,
            name: body.0.name,
            registration_code: body.0.registration_code,
            barcode: body.0.barcode,
            category_id: category_uuid,
            brand_id: brand_uuid,
            cost,
            sell_price,
            additional_info: body.0.additional_info,
            on_promotion: body.0.on_promotion,
        };

        match self.update_use_case.execute(params).await {
            Ok(details) => UpdateProductResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    401 => UpdateProductResponse::Unauthorized(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }
}

/// Parses an optional decimal string, reporting the offending field on
/// failure.
fn parse_money(
    raw: Option<String>,
    field: &str,
    message: &str,
) -> Result<Option<BigDecimal>, Json<ErrorResponse>> {
    match raw {
        Some(raw) => BigDecimal::from_str(&raw)
            .map(Some)
            .map_err(|_| invalid_field(field, message)),
        None => Ok(None),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
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

/// Shared by the promotion listing and the restock report.
#[derive(poem_openapi::ApiResponse)]
pub enum GetProductPageResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedProductsResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum DeleteProductResponse {
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

#[derive(poem_openapi::ApiResponse)]
pub enum TogglePromotionResponse {
    #[oai(status = 200)]
    Ok(Json<PromotionToggleResponse>),
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
