use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::sector::model::{Sector, SectorDetail, SectorSummary};
use business::domain::sector::repository::SectorRepository;

use super::entity::{SectorBinEntity, SectorEntity, SectorSummaryEntity};
use crate::db::translate_error;

pub struct SectorRepositoryPostgres {
    pool: PgPool,
}

impl SectorRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SectorRepository for SectorRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<SectorSummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, SectorSummaryEntity>(
            "SELECT s.id, s.letter, s.description, s.created_at, COUNT(bn.id) AS bin_count
            FROM sectors s
            LEFT JOIN bins bn ON bn.sector_id = s.id
            GROUP BY s.id
            ORDER BY s.letter",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Sector, RepositoryError> {
        let entity = sqlx::query_as::<_, SectorEntity>(
            "SELECT id, letter, description, created_at FROM sectors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_detail(&self, id: Uuid) -> Result<SectorDetail, RepositoryError> {
        let sector = self.get_by_id(id).await?;

        let bins = sqlx::query_as::<_, SectorBinEntity>(
            "SELECT bn.id, bn.code, s.letter AS sector_letter, p.name AS product_name,
                bn.quantity, bn.updated_at
            FROM bins bn
            JOIN sectors s ON s.id = bn.sector_id
            LEFT JOIN products p ON p.id = bn.product_id
            WHERE bn.sector_id = $1
            ORDER BY bn.code",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        let bin_count = bins.len() as u64;
        Ok(SectorDetail {
            sector,
            bin_count,
            bins: bins.into_iter().map(|e| e.into_domain()).collect(),
        })
    }

    async fn save(&self, sector: &Sector) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO sectors (id, letter, description, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                letter = EXCLUDED.letter,
                description = EXCLUDED.description",
        )
        .bind(sector.id)
        .bind(&sector.letter)
        .bind(&sector.description)
        .bind(sector.created_at)
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Bins go with the sector through ON DELETE CASCADE.
        sqlx::query("DELETE FROM sectors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_error)?;

        Ok(())
    }

    async fn letter_exists(
        &self,
        letter: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM sectors
                WHERE letter = $1 AND ($2::uuid IS NULL OR id <> $2)
            )",
        )
        .bind(letter)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Ok(exists)
    }
}
