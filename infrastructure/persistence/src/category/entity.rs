use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::{Category, CategorySummary};

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// COUNT over products, so the row always carries one.
    pub product_count: i64,
}

impl CategoryEntity {
    pub fn into_domain(self) -> CategorySummary {
        CategorySummary {
            category: Category::from_repository(self.id, self.name, self.created_at),
            product_count: self.product_count as u64,
        }
    }
}
