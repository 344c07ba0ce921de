use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::{Rule, ValidationError, Violation};

/// Supplier brand. The tax id keeps the Brazilian CNPJ shape
/// (`NN.NNN.NNN/NNNN-NN`) used on invoices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewBrandProps {
    pub name: String,
    pub tax_id: String,
}

impl Brand {
    pub fn validate(name: &str, tax_id: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        violations.extend(Rule::NonEmpty.check("name", name, "brand.name_required"));
        violations.extend(Rule::TaxId.check("tax_id", tax_id, "brand.tax_id_format"));
        violations
    }

    pub fn new(props: NewBrandProps) -> Result<Self, ValidationError> {
        ValidationError::check(Self::validate(&props.name, &props.tax_id))?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            tax_id: props.tax_id,
            created_at: Utc::now(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        name: String,
        tax_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            tax_id,
            created_at,
        }
    }

    /// New field values, same identity and registration date.
    pub fn with_fields(&self, name: String, tax_id: String) -> Self {
        Self {
            id: self.id,
            name,
            tax_id,
            created_at: self.created_at,
        }
    }
}

/// Brand plus how many products carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSummary {
    pub brand: Brand,
    pub product_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, tax_id: &str) -> NewBrandProps {
        NewBrandProps {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
        }
    }

    #[test]
    fn should_create_brand_when_fields_valid() {
        let brand = Brand::new(props("Acme Foods", "12.345.678/0001-99")).unwrap();
        assert_eq!(brand.name, "Acme Foods");
        assert_eq!(brand.tax_id, "12.345.678/0001-99");
    }

    #[test]
    fn should_reject_malformed_tax_id() {
        let err = Brand::new(props("Acme Foods", "12345678000199")).unwrap_err();
        assert_eq!(err.violations[0].field, "tax_id");
    }

    #[test]
    fn should_report_name_and_tax_id_violations_together() {
        let err = Brand::new(props("", "nope")).unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "tax_id"]);
    }
}
