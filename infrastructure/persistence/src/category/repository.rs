use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::{Category, CategorySummary};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::db::translate_error;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<CategorySummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT c.id, c.name, c.created_at, COUNT(p.id) AS product_count
            FROM categories c
            LEFT JOIN products p ON p.category_id = c.id
            GROUP BY c.id
            ORDER BY c.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CategorySummary, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT c.id, c.name, c.created_at, COUNT(p.id) AS product_count
            FROM categories c
            LEFT JOIN products p ON p.category_id = c.id
            WHERE c.id = $1
            GROUP BY c.id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO categories (id, name, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // ON DELETE RESTRICT on products surfaces here as ReferenceProtected.
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(())
    }

    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM categories
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
}
