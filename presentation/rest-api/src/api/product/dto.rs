use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::bin::model::StockLocation;
use business::domain::product::model::ProductDetails;
use business::domain::product::use_cases::toggle_promotion::PromotionToggle;

use crate::api::brand::dto::BrandResponse;
use crate::api::category::dto::CategoryResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Internal registration code (unique, cannot be empty)
    pub registration_code: String,
    /// Digits-only barcode (unique)
    pub barcode: String,
    /// Category id (must exist)
    pub category_id: String,
    /// Brand id (must exist)
    pub brand_id: String,
    /// Acquisition cost as a decimal string, e.g. `10.50`
    pub cost: String,
    /// Selling price as a decimal string, e.g. `15.90`
    pub sell_price: String,
    /// Free-form notes
    pub additional_info: Option<String>,
    /// Whether the product starts on promotion, defaults to false
    pub on_promotion: Option<bool>,
}

/// Partial update: omitted fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: Option<String>,
    /// Internal registration code (unique, cannot be empty)
    pub registration_code: Option<String>,
    /// Digits-only barcode (unique)
    pub barcode: Option<String>,
    /// Category id (must exist)
    pub category_id: Option<String>,
    /// Brand id (must exist)
    pub brand_id: Option<String>,
    /// Acquisition cost as a decimal string
    pub cost: Option<String>,
    /// Selling price as a decimal string
    pub sell_price: Option<String>,
    /// Free-form notes
    pub additional_info: Option<String>,
    /// Whether the product is on promotion
    pub on_promotion: Option<bool>,
}

/// One stocked location of a product.
#[derive(Debug, Clone, Object)]
pub struct StockLocationResponse {
    /// Letter of the sector holding the bin
    pub sector_letter: String,
    /// Bin code inside the sector
    pub bin_code: String,
    /// Units stored there
    pub quantity: u32,
    /// Sector letter plus bin code, e.g. `A-01`
    pub full_location: String,
}

impl From<StockLocation> for StockLocationResponse {
    fn from(location: StockLocation) -> Self {
        let full_location = location.full_location();
        Self {
            sector_letter: location.sector_letter,
            bin_code: location.bin_code,
            quantity: location.quantity,
            full_location,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Internal registration code
    pub registration_code: String,
    /// Digits-only barcode
    pub barcode: String,
    /// Category with its product count
    pub category: CategoryResponse,
    /// Brand with its product count
    pub brand: BrandResponse,
    /// Acquisition cost as a decimal string
    pub cost: String,
    /// Selling price as a decimal string
    pub sell_price: String,
    /// Markup over cost as a percentage string, e.g. `51.43`
    pub profit_margin: String,
    /// Free-form notes
    pub additional_info: Option<String>,
    /// Whether the product is on promotion
    pub on_promotion: bool,
    /// Every bin currently stocking the product
    pub locations: Vec<StockLocationResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<ProductDetails> for ProductResponse {
    fn from(details: ProductDetails) -> Self {
        let profit_margin = details.product.profit_margin().to_string();
        Self {
            id: details.product.id.to_string(),
            name: details.product.name,
            registration_code: details.product.registration_code,
            barcode: details.product.barcode,
            category: details.category.into(),
            brand: details.brand.into(),
            cost: details.product.cost.to_string(),
            sell_price: details.product.sell_price.to_string(),
            profit_margin,
            additional_info: details.product.additional_info,
            on_promotion: details.product.on_promotion,
            locations: details.locations.into_iter().map(|l| l.into()).collect(),
            created_at: details.product.created_at,
        }
    }
}

/// Page envelope shared by the promotion listing and the restock report.
#[derive(Debug, Clone, Object)]
pub struct PaginatedProductsResponse {
    /// Total rows matching the query, across all pages
    pub count: u64,
    /// Rows of the requested page
    pub results: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct PromotionToggleResponse {
    /// Human-readable outcome, reflecting the new state
    pub message: String,
    /// The product after the flip
    pub product: ProductResponse,
}

impl From<PromotionToggle> for PromotionToggleResponse {
    fn from(toggle: PromotionToggle) -> Self {
        Self {
            message: toggle.message,
            product: toggle.product.into(),
        }
    }
}
