use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::{Rule, ValidationError, Violation};

/// Product grouping used for reporting and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Field rules only. Uniqueness is checked against the repository by
    /// the use cases so all violations come back in one list.
    pub fn validate(name: &str) -> Vec<Violation> {
        Rule::NonEmpty
            .check("name", name, "category.name_required")
            .into_iter()
            .collect()
    }

    pub fn new(name: String) -> Result<Self, ValidationError> {
        ValidationError::check(Self::validate(&name))?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        })
    }

    /// Rebuilds a category from trusted storage without re-validating.
    pub fn from_repository(id: Uuid, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// Renames while keeping identity and registration date.
    pub fn renamed(&self, name: String) -> Self {
        Self {
            id: self.id,
            name,
            created_at: self.created_at,
        }
    }
}

/// Category plus how many products point at it, as the API lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub product_count: u64,
}
