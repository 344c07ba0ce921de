use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::{Category, CategorySummary};

#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (unique, cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCategoryRequest {
    /// Category name (unique, cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    /// Category name
    pub name: String,
    /// How many products belong to this category
    pub total_products: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.category.id.to_string(),
            name: summary.category.name,
            total_products: summary.product_count,
            created_at: summary.category.created_at,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        // A category fresh out of creation has no products yet.
        Self {
            id: category.id.to_string(),
            name: category.name,
            total_products: 0,
            created_at: category.created_at,
        }
    }
}
