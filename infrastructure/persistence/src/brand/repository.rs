use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::brand::model::{Brand, BrandSummary};
use business::domain::brand::repository::BrandRepository;
use business::domain::errors::RepositoryError;

use super::entity::BrandEntity;
use crate::db::translate_error;

pub struct BrandRepositoryPostgres {
    pool: PgPool,
}

impl BrandRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for BrandRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<BrandSummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, BrandEntity>(
            "SELECT b.id, b.name, b.tax_id, b.created_at, COUNT(p.id) AS product_count
            FROM brands b
            LEFT JOIN products p ON p.brand_id = b.id
            GROUP BY b.id
            ORDER BY b.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<BrandSummary, RepositoryError> {
        let entity = sqlx::query_as::<_, BrandEntity>(
            "SELECT b.id, b.name, b.tax_id, b.created_at, COUNT(p.id) AS product_count
            FROM brands b
            LEFT JOIN products p ON p.brand_id = b.id
            WHERE b.id = $1
            GROUP BY b.id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, brand: &Brand) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO brands (id, name, tax_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                tax_id = EXCLUDED.tax_id",
        )
        .bind(brand.id)
        .bind(&brand.name)
        .bind(&brand.tax_id)
        .bind(brand.created_at)
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // ON DELETE RESTRICT on products surfaces here as ReferenceProtected.
        sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(())
    }

    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM brands
                WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2)
            )",
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }

    async fn tax_id_exists(
        &self,
        tax_id: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM brands
                WHERE tax_id = $1 AND ($2::uuid IS NULL OR id <> $2)
            )",
        )
        .bind(tax_id)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }
}
