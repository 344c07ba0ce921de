use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::bin::model::BinOverview;
use crate::domain::validation::{Rule, ValidationError, Violation};

/// Warehouse aisle named by a single uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    pub id: Uuid,
    pub letter: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewSectorProps {
    pub letter: String,
    pub description: Option<String>,
}

impl Sector {
    pub fn validate(letter: &str) -> Vec<Violation> {
        Rule::UppercaseLetter
            .check("letter", letter, "sector.letter_format")
            .into_iter()
            .collect()
    }

    pub fn new(props: NewSectorProps) -> Result<Self, ValidationError> {
        ValidationError::check(Self::validate(&props.letter))?;
        Ok(Self {
            id: Uuid::new_v4(),
            letter: props.letter,
            description: props.description,
            created_at: Utc::now(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        letter: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            letter,
            description,
            created_at,
        }
    }

    pub fn with_fields(&self, letter: String, description: Option<String>) -> Self {
        Self {
            id: self.id,
            letter,
            description,
            created_at: self.created_at,
        }
    }
}

/// Sector plus its bin count, as the list endpoint reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorSummary {
    pub sector: Sector,
    pub bin_count: u64,
}

/// Detail view: the summary plus every bin in the sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorDetail {
    pub sector: Sector,
    pub bin_count: u64,
    pub bins: Vec<BinOverview>,
}
