use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bin::model::StockLocation;
use crate::domain::errors::RepositoryError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::{Product, ProductDetails, ProductSummary};
use crate::domain::shared::page::{Page, PageRequest};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Matching products with category, brand and locations embedded,
    /// newest registrations first.
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<ProductDetails>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ProductDetails, RepositoryError>;
    /// Compact row used when a product is embedded in another response.
    async fn get_summary(&self, id: Uuid) -> Result<ProductSummary, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Longest-registered products first, capped at `limit`.
    async fn get_oldest(&self, limit: i64) -> Result<Vec<ProductDetails>, RepositoryError>;
    async fn get_on_promotion(
        &self,
        page: PageRequest,
    ) -> Result<Page<ProductDetails>, RepositoryError>;
    /// Flips the promotion flag in a single statement and returns the row
    /// as it looks after the flip.
    async fn toggle_promotion(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Where the product is stocked, ordered by sector letter then bin code.
    async fn locations_of(&self, id: Uuid) -> Result<Vec<StockLocation>, RepositoryError>;
    async fn registration_code_exists(
        &self,
        registration_code: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
    async fn barcode_exists(
        &self,
        barcode: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
}
