use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Days, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::bin::model::StockLocation;
use business::domain::errors::RepositoryError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{Product, ProductDetails, ProductSummary};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::page::{Page, PageRequest};

use super::entity::{LocationEntity, ProductDetailsEntity, ProductEntity, ProductSummaryEntity};
use crate::db::translate_error;

/// Shared select for every details query. The counts come from subselects
/// so a filtered product list still reports each category's and brand's
/// full catalog size.
const PRODUCT_DETAILS_SELECT: &str = "SELECT p.id, p.name, p.registration_code, p.barcode,
        p.category_id, p.brand_id, p.cost, p.sell_price, p.additional_info,
        p.on_promotion, p.created_at,
        c.name AS category_name, c.created_at AS category_created_at,
        (SELECT COUNT(*) FROM products pc WHERE pc.category_id = c.id) AS category_product_count,
        b.name AS brand_name, b.tax_id AS brand_tax_id, b.created_at AS brand_created_at,
        (SELECT COUNT(*) FROM products pb WHERE pb.brand_id = b.id) AS brand_product_count
    FROM products p
    JOIN categories c ON c.id = p.category_id
    JOIN brands b ON b.id = p.brand_id";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stocked locations for a batch of products, grouped by product id.
    async fn locations_for(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<StockLocation>>, RepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LocationEntity>(
            "SELECT bn.product_id, s.letter AS sector_letter, bn.code AS bin_code, bn.quantity
            FROM bins bn
            JOIN sectors s ON s.id = bn.sector_id
            WHERE bn.product_id = ANY($1) AND bn.quantity > 0
            ORDER BY s.letter, bn.code",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        let mut grouped: HashMap<Uuid, Vec<StockLocation>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.product_id)
                .or_default()
                .push(row.into_domain());
        }
        Ok(grouped)
    }

    async fn attach_locations(
        &self,
        entities: Vec<ProductDetailsEntity>,
    ) -> Result<Vec<ProductDetails>, RepositoryError> {
        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut locations = self.locations_for(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let stocked = locations.remove(&e.id).unwrap_or_default();
                e.into_domain(stocked)
            })
            .collect())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductDetails>, RepositoryError> {
        // The upper date bound covers the whole last calendar day, so the
        // probe is strictly below the following midnight.
        let registered_since = filter
            .registered_from
            .map(|d| d.and_time(NaiveTime::MIN).and_utc());
        let registered_until = filter
            .registered_to
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .map(|d| d.and_time(NaiveTime::MIN).and_utc());

        let sql = format!(
            "{PRODUCT_DETAILS_SELECT}
            WHERE ($1::text IS NULL OR p.barcode ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR EXISTS (
                    SELECT 1 FROM bins bn
                    JOIN sectors s ON s.id = bn.sector_id
                    WHERE bn.product_id = p.id AND UPPER(s.letter) = UPPER($2)))
              AND ($3::text IS NULL OR EXISTS (
                    SELECT 1 FROM bins bn
                    WHERE bn.product_id = p.id AND UPPER(bn.code) = UPPER($3)))
              AND ($4::text IS NULL OR b.name ILIKE '%' || $4 || '%')
              AND ($5::text IS NULL OR c.name ILIKE '%' || $5 || '%')
              AND ($6::boolean IS NULL OR p.on_promotion = $6)
              AND ($7::numeric IS NULL OR p.sell_price >= $7)
              AND ($8::numeric IS NULL OR p.sell_price <= $8)
              AND ($9::timestamptz IS NULL OR p.created_at >= $9)
              AND ($10::timestamptz IS NULL OR p.created_at < $10)
            ORDER BY p.created_at DESC"
        );

        let entities = sqlx::query_as::<_, ProductDetailsEntity>(&sql)
            .bind(&filter.barcode)
            .bind(&filter.sector_letter)
            .bind(&filter.bin_code)
            .bind(&filter.brand_name)
            .bind(&filter.category_name)
            .bind(filter.on_promotion)
            .bind(&filter.price_min)
            .bind(&filter.price_max)
            .bind(registered_since)
            .bind(registered_until)
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        self.attach_locations(entities).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ProductDetails, RepositoryError> {
        let sql = format!("{PRODUCT_DETAILS_SELECT} WHERE p.id = $1");
        let entity = sqlx::query_as::<_, ProductDetailsEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(translate_error)?
            .ok_or(RepositoryError::NotFound)?;

        let locations = self.locations_of(id).await?;
        Ok(entity.into_domain(locations))
    }

    async fn get_summary(&self, id: Uuid) -> Result<ProductSummary, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductSummaryEntity>(
            "SELECT p.id, p.name, p.registration_code, p.barcode,
                c.name AS category_name, b.name AS brand_name,
                p.cost, p.sell_price, p.on_promotion, p.created_at
            FROM products p
            JOIN categories c ON c.id = p.category_id
            JOIN brands b ON b.id = p.brand_id
            WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, registration_code, barcode, category_id,
                brand_id, cost, sell_price, additional_info, on_promotion, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                registration_code = EXCLUDED.registration_code,
                barcode = EXCLUDED.barcode,
                category_id = EXCLUDED.category_id,
                brand_id = EXCLUDED.brand_id,
                cost = EXCLUDED.cost,
                sell_price = EXCLUDED.sell_price,
                additional_info = EXCLUDED.additional_info,
                on_promotion = EXCLUDED.on_promotion"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.registration_code)
        .bind(&product.barcode)
        .bind(product.category_id)
        .bind(product.brand_id)
        .bind(&product.cost)
        .bind(&product.sell_price)
        .bind(&product.additional_info)
        .bind(product.on_promotion)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Stocked bins are detached by ON DELETE SET NULL, never removed.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(())
    }

    async fn get_oldest(&self, limit: i64) -> Result<Vec<ProductDetails>, RepositoryError> {
        let sql = format!("{PRODUCT_DETAILS_SELECT} ORDER BY p.created_at ASC LIMIT $1");
        let entities = sqlx::query_as::<_, ProductDetailsEntity>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        self.attach_locations(entities).await
    }

    async fn get_on_promotion(
        &self,
        page: PageRequest,
    ) -> Result<Page<ProductDetails>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE on_promotion",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        let sql = format!(
            "{PRODUCT_DETAILS_SELECT}
            WHERE p.on_promotion
            ORDER BY p.created_at DESC
            LIMIT $1 OFFSET $2"
        );
        let entities = sqlx::query_as::<_, ProductDetailsEntity>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(Page {
            items: self.attach_locations(entities).await?,
            total: total as u64,
        })
    }

    async fn toggle_promotion(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "UPDATE products SET on_promotion = NOT on_promotion
            WHERE id = $1
            RETURNING id, name, registration_code, barcode, category_id, brand_id,
                cost, sell_price, additional_info, on_promotion, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn locations_of(&self, id: Uuid) -> Result<Vec<StockLocation>, RepositoryError> {
        let rows = sqlx::query_as::<_, LocationEntity>(
            "SELECT bn.product_id, s.letter AS sector_letter, bn.code AS bin_code, bn.quantity
            FROM bins bn
            JOIN sectors s ON s.id = bn.sector_id
            WHERE bn.product_id = $1 AND bn.quantity > 0
            ORDER BY s.letter, bn.code",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(rows.into_iter().map(|r| r.into_domain()).collect())
    }

    async fn registration_code_exists(
        &self,
        registration_code: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM products
                WHERE registration_code = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(registration_code)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }

    async fn barcode_exists(
        &self,
        barcode: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM products
                WHERE barcode = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(barcode)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }
}
