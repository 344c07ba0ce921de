use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bin::model::BinOverview;
use business::domain::sector::model::{Sector, SectorSummary};

#[derive(Debug, FromRow)]
pub struct SectorEntity {
    pub id: Uuid,
    pub letter: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SectorEntity {
    pub fn into_domain(self) -> Sector {
        Sector::from_repository(self.id, self.letter, self.description, self.created_at)
    }
}

#[derive(Debug, FromRow)]
pub struct SectorSummaryEntity {
    pub id: Uuid,
    pub letter: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub bin_count: i64,
}

impl SectorSummaryEntity {
    pub fn into_domain(self) -> SectorSummary {
        SectorSummary {
            sector: Sector::from_repository(self.id, self.letter, self.description, self.created_at),
            bin_count: self.bin_count as u64,
        }
    }
}

/// Bin line for the sector detail view; the product name comes from an
/// outer join and stays NULL for empty bins.
#[derive(Debug, FromRow)]
pub struct SectorBinEntity {
    pub id: Uuid,
    pub code: String,
    pub sector_letter: String,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

impl SectorBinEntity {
    pub fn into_domain(self) -> BinOverview {
        let full_location = format!("{}-{}", self.sector_letter, self.code);
        BinOverview {
            id: self.id,
            code: self.code,
            product_name: self.product_name,
            quantity: self.quantity as u32,
            full_location,
            updated_at: self.updated_at,
        }
    }
}
