use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::bin::model::BinOverview;
use business::domain::sector::model::{Sector, SectorDetail, SectorSummary};

#[derive(Debug, Clone, Object)]
pub struct CreateSectorRequest {
    /// Single uppercase letter naming the aisle (unique)
    pub letter: String,
    /// Free-form description
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateSectorRequest {
    /// Single uppercase letter naming the aisle (unique)
    pub letter: String,
    /// Free-form description
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SectorResponse {
    /// Sector unique identifier
    pub id: String,
    /// Aisle letter
    pub letter: String,
    /// Free-form description
    pub description: Option<String>,
    /// How many bins the sector holds
    pub total_bins: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<SectorSummary> for SectorResponse {
    fn from(summary: SectorSummary) -> Self {
        Self {
            id: summary.sector.id.to_string(),
            letter: summary.sector.letter,
            description: summary.sector.description,
            total_bins: summary.bin_count,
            created_at: summary.sector.created_at,
        }
    }
}

impl From<Sector> for SectorResponse {
    fn from(sector: Sector) -> Self {
        // A sector fresh out of creation has no bins yet.
        Self {
            id: sector.id.to_string(),
            letter: sector.letter,
            description: sector.description,
            total_bins: 0,
            created_at: sector.created_at,
        }
    }
}

/// One bin row inside the sector detail view.
#[derive(Debug, Clone, Object)]
pub struct SectorBinResponse {
    /// Bin unique identifier
    pub id: String,
    /// Numeric bin code inside the sector
    pub code: String,
    /// Name of the stored product, if any
    pub product_name: Option<String>,
    /// Units currently stored
    pub quantity: u32,
    /// Sector letter plus bin code, e.g. `A-01`
    pub full_location: String,
    /// Last change timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<BinOverview> for SectorBinResponse {
    fn from(bin: BinOverview) -> Self {
        Self {
            id: bin.id.to_string(),
            code: bin.code,
            product_name: bin.product_name,
            quantity: bin.quantity,
            full_location: bin.full_location,
            updated_at: bin.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SectorDetailResponse {
    /// Sector unique identifier
    pub id: String,
    /// Aisle letter
    pub letter: String,
    /// Free-form description
    pub description: Option<String>,
    /// How many bins the sector holds
    pub total_bins: u64,
    /// Every bin in the sector, ordered by code
    pub bins: Vec<SectorBinResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<SectorDetail> for SectorDetailResponse {
    fn from(detail: SectorDetail) -> Self {
        Self {
            id: detail.sector.id.to_string(),
            letter: detail.sector.letter,
            description: detail.sector.description,
            total_bins: detail.bin_count,
            bins: detail.bins.into_iter().map(|b| b.into()).collect(),
            created_at: detail.sector.created_at,
        }
    }
}
