use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::ProductSummary;
use crate::domain::validation::{Rule, ValidationError, Violation};

/// One physical slot in a sector, addressed as `<letter>-<code>`.
/// Codes only need to be unique inside their sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    pub id: Uuid,
    pub code: String,
    pub sector_id: Uuid,
    /// Letter of the owning sector, resolved by the repository join.
    pub sector_letter: String,
    pub product_id: Option<Uuid>,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBinProps {
    pub code: String,
    pub sector_id: Uuid,
    pub sector_letter: String,
    pub product_id: Option<Uuid>,
    pub quantity: u32,
}

impl Bin {
    /// Field rules for API writes. Rows left productless by a product
    /// deletion keep their quantity and are re-checked on the next write.
    pub fn validate(code: &str, product_id: Option<Uuid>, quantity: u32) -> Vec<Violation> {
        let mut violations = Vec::new();
        violations.extend(Rule::Digits.check("code", code, "bin.code_digits"));
        if quantity > 0 && product_id.is_none() {
            violations.push(Violation::new("quantity", "bin.quantity_requires_product"));
        }
        violations
    }

    pub fn new(props: NewBinProps) -> Result<Self, ValidationError> {
        ValidationError::check(Self::validate(&props.code, props.product_id, props.quantity))?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            code: props.code,
            sector_id: props.sector_id,
            sector_letter: props.sector_letter,
            product_id: props.product_id,
            quantity: props.quantity,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        code: String,
        sector_id: Uuid,
        sector_letter: String,
        product_id: Option<Uuid>,
        quantity: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            sector_id,
            sector_letter,
            product_id,
            quantity,
            created_at,
            updated_at,
        }
    }

    /// A bin counts as empty with no product or a zero quantity.
    pub fn is_empty(&self) -> bool {
        self.product_id.is_none() || self.quantity == 0
    }

    /// Human-readable address, e.g. `A-11`.
    pub fn full_location(&self) -> String {
        format!("{}-{}", self.sector_letter, self.code)
    }
}

/// Where some product sits: sector letter, bin code and unit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLocation {
    pub sector_letter: String,
    pub bin_code: String,
    pub quantity: u32,
}

impl StockLocation {
    pub fn full_location(&self) -> String {
        format!("{}-{}", self.sector_letter, self.bin_code)
    }
}

/// Bin line embedded in a sector detail response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOverview {
    pub id: Uuid,
    pub code: String,
    pub product_name: Option<String>,
    pub quantity: u32,
    pub full_location: String,
    pub updated_at: DateTime<Utc>,
}

/// Bin plus the stored product summary, as the API returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct BinDetails {
    pub bin: Bin,
    pub product: Option<ProductSummary>,
}

/// Bin list filters; fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinFilter {
    /// Case-insensitive match on the owning sector letter.
    pub sector_letter: Option<String>,
    pub product_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(code: &str, product_id: Option<Uuid>, quantity: u32) -> NewBinProps {
        NewBinProps {
            code: code.to_string(),
            sector_id: Uuid::new_v4(),
            sector_letter: "A".to_string(),
            product_id,
            quantity,
        }
    }

    #[test]
    fn should_create_bin_with_digit_code() {
        let bin = Bin::new(props("11", None, 0)).unwrap();
        assert_eq!(bin.full_location(), "A-11");
        assert!(bin.is_empty());
    }

    #[test]
    fn should_reject_non_digit_code() {
        let err = Bin::new(props("11A", None, 0)).unwrap_err();
        assert_eq!(err.violations[0].field, "code");
    }

    #[test]
    fn should_reject_quantity_without_product() {
        let err = Bin::new(props("11", None, 5)).unwrap_err();
        assert_eq!(err.violations[0].message, "bin.quantity_requires_product");
    }

    #[test]
    fn should_accept_quantity_with_product() {
        let bin = Bin::new(props("11", Some(Uuid::new_v4()), 5)).unwrap();
        assert!(!bin.is_empty());
    }

    #[test]
    fn should_treat_zero_quantity_with_product_as_empty() {
        let bin = Bin::new(props("11", Some(Uuid::new_v4()), 0)).unwrap();
        assert!(bin.is_empty());
    }

    #[test]
    fn should_join_letter_and_code_for_location() {
        let location = StockLocation {
            sector_letter: "C".to_string(),
            bin_code: "207".to_string(),
            quantity: 3,
        };
        assert_eq!(location.full_location(), "C-207");
    }
}
