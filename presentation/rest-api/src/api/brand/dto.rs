use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::brand::model::{Brand, BrandSummary};

#[derive(Debug, Clone, Object)]
pub struct CreateBrandRequest {
    /// Brand name (unique, cannot be empty)
    pub name: String,
    /// Tax id in `NN.NNN.NNN/NNNN-NN` format (unique)
    pub tax_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateBrandRequest {
    /// Brand name (unique, cannot be empty)
    pub name: String,
    /// Tax id in `NN.NNN.NNN/NNNN-NN` format (unique)
    pub tax_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct BrandResponse {
    /// Brand unique identifier
    pub id: String,
    /// Brand name
    pub name: String,
    /// Registered tax id
    pub tax_id: String,
    /// How many products carry this brand
    pub total_products: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<BrandSummary> for BrandResponse {
    fn from(summary: BrandSummary) -> Self {
        Self {
            id: summary.brand.id.to_string(),
            name: summary.brand.name,
            tax_id: summary.brand.tax_id,
            total_products: summary.product_count,
            created_at: summary.brand.created_at,
        }
    }
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        // A brand fresh out of creation has no products yet.
        Self {
            id: brand.id.to_string(),
            name: brand.name,
            tax_id: brand.tax_id,
            total_products: 0,
            created_at: brand.created_at,
        }
    }
}
