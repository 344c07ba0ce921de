use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// Catalog search filters. All fields are optional and combine with AND;
/// an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Substring match on the barcode.
    pub barcode: Option<String>,
    /// Case-insensitive match on the letter of a sector stocking the product.
    pub sector_letter: Option<String>,
    /// Case-insensitive match on the code of a bin stocking the product.
    pub bin_code: Option<String>,
    /// Substring match on the brand name.
    pub brand_name: Option<String>,
    /// Substring match on the category name.
    pub category_name: Option<String>,
    pub on_promotion: Option<bool>,
    /// Lower bound on the sell price, inclusive.
    pub price_min: Option<BigDecimal>,
    /// Upper bound on the sell price, inclusive.
    pub price_max: Option<BigDecimal>,
    /// First registration day to include.
    pub registered_from: Option<NaiveDate>,
    /// Last registration day to include, as a whole calendar day.
    pub registered_to: Option<NaiveDate>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        *self == ProductFilter::default()
    }
}
