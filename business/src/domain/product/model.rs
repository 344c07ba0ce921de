use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::bin::model::StockLocation;
use crate::domain::brand::model::BrandSummary;
use crate::domain::category::model::CategorySummary;
use crate::domain::validation::{Rule, ValidationError, Violation};

/// Catalog entry. Prices are exact decimals; floats never touch money.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_id: Uuid,
    pub brand_id: Uuid,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub additional_info: Option<String>,
    pub on_promotion: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_id: Uuid,
    pub brand_id: Uuid,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub additional_info: Option<String>,
    pub on_promotion: bool,
}

impl Product {
    pub fn validate(
        name: &str,
        registration_code: &str,
        barcode: &str,
        cost: &BigDecimal,
        sell_price: &BigDecimal,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        violations.extend(Rule::NonEmpty.check("name", name, "product.name_required"));
        violations.extend(Rule::NonEmpty.check(
            "registration_code",
            registration_code,
            "product.registration_code_required",
        ));
        violations.extend(Rule::Digits.check("barcode", barcode, "product.barcode_digits"));
        violations.extend(check_money("cost", cost));
        violations.extend(check_money("sell_price", sell_price));
        violations
    }

    pub fn new(props: NewProductProps) -> Result<Self, ValidationError> {
        ValidationError::check(Self::validate(
            &props.name,
            &props.registration_code,
            &props.barcode,
            &props.cost,
            &props.sell_price,
        ))?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            registration_code: props.registration_code,
            barcode: props.barcode,
            category_id: props.category_id,
            brand_id: props.brand_id,
            cost: props.cost,
            sell_price: props.sell_price,
            additional_info: props.additional_info,
            on_promotion: props.on_promotion,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        registration_code: String,
        barcode: String,
        category_id: Uuid,
        brand_id: Uuid,
        cost: BigDecimal,
        sell_price: BigDecimal,
        additional_info: Option<String>,
        on_promotion: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            registration_code,
            barcode,
            category_id,
            brand_id,
            cost,
            sell_price,
            additional_info,
            on_promotion,
            created_at,
        }
    }

    /// Markup over cost as a percentage, rounded half-up to two decimals.
    /// A zero cost yields a zero margin instead of a division error.
    pub fn profit_margin(&self) -> BigDecimal {
        if self.cost > BigDecimal::zero() {
            let margin = (&self.sell_price - &self.cost) * BigDecimal::from(100) / &self.cost;
            margin.with_scale_round(2, RoundingMode::HalfUp)
        } else {
            BigDecimal::zero().with_scale(2)
        }
    }
}

fn check_money(field: &'static str, value: &BigDecimal) -> Vec<Violation> {
    let mut violations = Vec::new();
    if *value < BigDecimal::zero() {
        violations.push(Violation::new(field, "product.price_negative"));
    }
    if value.fractional_digit_count() > 2 {
        violations.push(Violation::new(field, "product.price_max_two_decimals"));
    }
    violations
}

/// Compact product line embedded in bin responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub registration_code: String,
    pub barcode: String,
    pub category_name: String,
    pub brand_name: String,
    pub cost: BigDecimal,
    pub sell_price: BigDecimal,
    pub on_promotion: bool,
    pub created_at: DateTime<Utc>,
}

/// Full product view: the row itself, its category and brand with their
/// counts, and every stocked location.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub category: CategorySummary,
    pub brand: BrandSummary,
    pub locations: Vec<StockLocation>,
}
