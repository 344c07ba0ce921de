use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bin::model::StockLocation;
use business::domain::brand::model::{Brand, BrandSummary};
use business::domain::category::model::{Category, CategorySummary};
use business::domain::product::model::{Product, ProductDetails, ProductSummary};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_id: Uuid,
    pub brand_id: Uuid,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub additional_info: Option<String>,
    pub on_promotion: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.registration_code,
            self.barcode,
            self.category_id,
            self.brand_id,
            self.cost,
            self.sell_price,
            self.additional_info,
            self.on_promotion,
            self.created_at,
        )
    }
}

/// Product row joined with its category and brand, including their
/// product counts, as one result row.
#[derive(Debug, FromRow)]
pub struct ProductDetailsEntity {
    pub id: Uuid,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_id: Uuid,
    pub brand_id: Uuid,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub additional_info: Option<String>,
    pub on_promotion: bool,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
    pub category_created_at: DateTime<Utc>,
    pub category_product_count: i64,
    pub brand_name: String,
    pub brand_tax_id: String,
    pub brand_created_at: DateTime<Utc>,
    pub brand_product_count: i64,
}

impl ProductDetailsEntity {
    pub fn into_domain(self, locations: Vec<StockLocation>) -> ProductDetails {
        ProductDetails {
            product: Product::from_repository(
                self.id,
                self.name,
                self.registration_code,
                self.barcode,
                self.category_id,
                self.brand_id,
                self.cost,
                self.sell_price,
                self.additional_info,
                self.on_promotion,
                self.created_at,
            ),
            category: CategorySummary {
                category: Category::from_repository(
                    self.category_id,
                    self.category_name,
                    self.category_created_at,
                ),
                product_count: self.category_product_count as u64,
            },
            brand: BrandSummary {
                brand: Brand::from_repository(
                    self.brand_id,
                    self.brand_name,
                    self.brand_tax_id,
                    self.brand_created_at,
                ),
                product_count: self.brand_product_count as u64,
            },
            locations,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductSummaryEntity {
    pub id: Uuid,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_name: String,
    pub brand_name: String,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub on_promotion: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductSummaryEntity {
    pub fn into_domain(self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name,
            registration_code: self.registration_code,
            barcode: self.barcode,
            category_name: self.category_name,
            brand_name: self.brand_name,
            cost: self.cost,
            sell_price: self.sell_price,
            on_promotion: self.on_promotion,
            created_at: self.created_at,
        }
    }
}

/// One stocked bin of some product, keyed for grouping.
#[derive(Debug, FromRow)]
pub struct LocationEntity {
    pub product_id: Uuid,
    pub sector_letter: String,
    pub bin_code: String,
    pub quantity: i32,
}

impl LocationEntity {
    pub fn into_domain(self) -> StockLocation {
        StockLocation {
            sector_letter: self.sector_letter,
            bin_code: self.bin_code,
            quantity: self.quantity as u32,
        }
    }
}
