use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::bin::model::BinDetails;
use business::domain::product::model::ProductSummary;

#[derive(Debug, Clone, Object)]
pub struct CreateBinRequest {
    /// Numeric bin code, unique inside the sector
    pub code: String,
    /// Owning sector id
    pub sector_id: String,
    /// Stored product id, omit for an empty bin
    pub product_id: Option<String>,
    /// Units stored, defaults to 0
    pub quantity: Option<u32>,
}

/// Full replacement: omitting `product_id` empties the bin.
#[derive(Debug, Clone, Object)]
pub struct UpdateBinRequest {
    /// Numeric bin code, unique inside the sector
    pub code: String,
    /// Owning sector id
    pub sector_id: String,
    /// Stored product id, omit for an empty bin
    pub product_id: Option<String>,
    /// Units stored, defaults to 0
    pub quantity: Option<u32>,
}

/// Compact product line embedded in bin responses.
#[derive(Debug, Clone, Object)]
pub struct ProductSummaryResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Internal registration code
    pub registration_code: String,
    /// Digits-only barcode
    pub barcode: String,
    /// Category name
    pub category_name: String,
    /// Brand name
    pub brand_name: String,
    /// Acquisition cost as a decimal string
    pub cost: String,
    /// Selling price as a decimal string
    pub sell_price: String,
    /// Whether the product is on promotion
    pub on_promotion: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name,
            registration_code: summary.registration_code,
            barcode: summary.barcode,
            category_name: summary.category_name,
            brand_name: summary.brand_name,
            cost: summary.cost.to_string(),
            sell_price: summary.sell_price.to_string(),
            on_promotion: summary.on_promotion,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BinResponse {
    /// Bin unique identifier
    pub id: String,
    /// Numeric bin code inside the sector
    pub code: String,
    /// Owning sector id
    pub sector_id: String,
    /// Letter of the owning sector
    pub sector_letter: String,
    /// Stored product, if any
    pub product: Option<ProductSummaryResponse>,
    /// Units currently stored
    pub quantity: u32,
    /// True when no product is stored or the count is zero
    pub is_empty: bool,
    /// Sector letter plus bin code, e.g. `A-01`
    pub full_location: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last change timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<BinDetails> for BinResponse {
    fn from(details: BinDetails) -> Self {
        let is_empty = details.bin.is_empty();
        let full_location = details.bin.full_location();
        Self {
            id: details.bin.id.to_string(),
            code: details.bin.code,
            sector_id: details.bin.sector_id.to_string(),
            sector_letter: details.bin.sector_letter,
            product: details.product.map(|p| p.into()),
            quantity: details.bin.quantity,
            is_empty,
            full_location,
            created_at: details.bin.created_at,
            updated_at: details.bin.updated_at,
        }
    }
}

/// Page envelope shared by the empty and occupied listings.
#[derive(Debug, Clone, Object)]
pub struct PaginatedBinsResponse {
    /// Total rows matching the query, across all pages
    pub count: u64,
    /// Rows of the requested page
    pub results: Vec<BinResponse>,
}
