use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::bin::model::{Bin, BinDetails, BinFilter};
use business::domain::bin::repository::BinRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::page::{Page, PageRequest};

use super::entity::BinDetailsEntity;
use crate::db::translate_error;

const BIN_DETAILS_SELECT: &str = "SELECT bn.id, bn.code, bn.sector_id, bn.product_id,
        bn.quantity, bn.created_at, bn.updated_at,
        s.letter AS sector_letter,
        p.name AS product_name,
        p.registration_code AS product_registration_code,
        p.barcode AS product_barcode,
        c.name AS product_category_name,
        b.name AS product_brand_name,
        p.cost AS product_cost,
        p.sell_price AS product_sell_price,
        p.on_promotion AS product_on_promotion,
        p.created_at AS product_created_at
    FROM bins bn
    JOIN sectors s ON s.id = bn.sector_id
    LEFT JOIN products p ON p.id = bn.product_id
    LEFT JOIN categories c ON c.id = p.category_id
    LEFT JOIN brands b ON b.id = p.brand_id";

pub struct BinRepositoryPostgres {
    pool: PgPool,
}

impl BinRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BinRepository for BinRepositoryPostgres {
    async fn get_all(&self, filter: &BinFilter) -> Result<Vec<BinDetails>, RepositoryError> {
        let sql = format!(
            "{BIN_DETAILS_SELECT}
            WHERE ($1::text IS NULL OR UPPER(s.letter) = UPPER($1))
              AND ($2::uuid IS NULL OR bn.product_id = $2)
            ORDER BY s.letter, bn.code"
        );
        let entities = sqlx::query_as::<_, BinDetailsEntity>(&sql)
            .bind(&filter.sector_letter)
            .bind(filter.product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<BinDetails, RepositoryError> {
        let sql = format!("{BIN_DETAILS_SELECT} WHERE bn.id = $1");
        let entity = sqlx::query_as::<_, BinDetailsEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(translate_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, bin: &Bin) -> Result<(), RepositoryError> {
        // The sector letter lives on sectors and is re-resolved by the
        // detail joins; only the reference is stored here.
        sqlx::query(
            r#"INSERT INTO bins (id, code, sector_id, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                code = EXCLUDED.code,
                sector_id = EXCLUDED.sector_id,
                product_id = EXCLUDED.product_id,
                quantity = EXCLUDED.quantity,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(bin.id)
        .bind(&bin.code)
        .bind(bin.sector_id)
        .bind(bin.product_id)
        .bind(bin.quantity as i32)
        .bind(bin.created_at)
        .bind(bin.updated_at)
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM bins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(())
    }

    async fn get_empty(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bins WHERE product_id IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        let sql = format!(
            "{BIN_DETAILS_SELECT}
            WHERE bn.product_id IS NULL
            ORDER BY s.letter, bn.code
            LIMIT $1 OFFSET $2"
        );
        let entities = sqlx::query_as::<_, BinDetailsEntity>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(Page {
            items: entities.into_iter().map(|e| e.into_domain()).collect(),
            total: total as u64,
        })
    }

    async fn get_occupied(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bins WHERE product_id IS NOT NULL AND quantity > 0",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        let sql = format!(
            "{BIN_DETAILS_SELECT}
            WHERE bn.product_id IS NOT NULL AND bn.quantity > 0
            ORDER BY s.letter, bn.code
            LIMIT $1 OFFSET $2"
        );
        let entities = sqlx::query_as::<_, BinDetailsEntity>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(Page {
            items: entities.into_iter().map(|e| e.into_domain()).collect(),
            total: total as u64,
        })
    }

    async fn code_exists_in_sector(
        &self,
        sector_id: Uuid,
        code: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM bins
                WHERE sector_id = $1 AND code = $2 AND ($3::uuid IS NULL OR id <> $3))",
        )
        .bind(sector_id)
        .bind(code)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }
}
