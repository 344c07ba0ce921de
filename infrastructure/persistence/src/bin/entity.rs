use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bin::model::{Bin, BinDetails};
use business::domain::product::model::ProductSummary;

/// Bin row joined with its sector letter and, when stocked, the product
/// summary columns. The product side is all-or-nothing: either every
/// `product_*` column is present or the bin holds no product.
#[derive(Debug, FromRow)]
pub struct BinDetailsEntity {
    pub id: Uuid,
    pub code: String,
    pub sector_id: Uuid,
    pub product_id: Option<Uuid>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sector_letter: String,
    pub product_name: Option<String>,
    pub product_registration_code: Option<String>,
    pub product_barcode: Option<String>,
    pub product_category_name: Option<String>,
    pub product_brand_name: Option<String>,
    pub product_cost: Option<BigDecimal>,
    pub product_sell_price: Option<BigDecimal>,
    pub product_on_promotion: Option<bool>,
    pub product_created_at: Option<DateTime<Utc>>,
}

impl BinDetailsEntity {
    pub fn into_domain(self) -> BinDetails {
        let product = match (
            self.product_id,
            self.product_name,
            self.product_registration_code,
            self.product_barcode,
            self.product_category_name,
            self.product_brand_name,
            self.product_cost,
            self.product_sell_price,
            self.product_on_promotion,
            self.product_created_at,
        ) {
            (
                Some(id),
                Some(name),
                Some(registration_code),
                Some(barcode),
                Some(category_name),
                Some(brand_name),
                Some(cost),
                Some(sell_price),
                Some(on_promotion),
                Some(created_at),
            ) => Some(ProductSummary {
                id,
                name,
                registration_code,
                barcode,
                category_name,
                brand_name,
                cost,
                sell_price,
                on_promotion,
                created_at,
            }),
            _ => None,
        };

        BinDetails {
            bin: Bin::from_repository(
                self.id,
                self.code,
                self.sector_id,
                self.sector_letter,
                self.product_id,
                self.quantity as u32,
                self.created_at,
                self.updated_at,
            ),
            product,
        }
    }
}
