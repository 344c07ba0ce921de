use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::brand::model::{Brand, BrandSummary};

#[derive(Debug, FromRow)]
pub struct BrandEntity {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
    pub product_count: i64,
}

impl BrandEntity {
    pub fn into_domain(self) -> BrandSummary {
        BrandSummary {
            brand: Brand::from_repository(self.id, self.name, self.tax_id, self.created_at),
            product_count: self.product_count as u64,
        }
    }
}
