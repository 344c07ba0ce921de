use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Brazilian-style tax id, e.g. `12.345.678/0001-99`.
pub static TAX_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").unwrap()
});

/// Single uppercase ASCII letter, used for sector names.
pub static SECTOR_LETTER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]$").unwrap());

/// Digits only, used for barcodes and bin codes.
pub static DIGITS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// A single field-level validation rule. Models compose these into their
/// `validate` functions so every rule lives in one place.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Rejects values that are blank after trimming.
    NonEmpty,
    Digits,
    UppercaseLetter,
    TaxId,
}

impl Rule {
    fn accepts(self, value: &str) -> bool {
        match self {
            Rule::NonEmpty => !value.trim().is_empty(),
            Rule::Digits => DIGITS_PATTERN.is_match(value),
            Rule::UppercaseLetter => SECTOR_LETTER_PATTERN.is_match(value),
            Rule::TaxId => TAX_ID_PATTERN.is_match(value),
        }
    }

    /// Applies the rule, tagging a failure with the owning field and an
    /// i18n-compatible message code.
    pub fn check(self, field: &'static str, value: &str, code: &'static str) -> Option<Violation> {
        if self.accepts(value) {
            None
        } else {
            Some(Violation::new(field, code))
        }
    }
}

/// One rejected field with its message code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// All violations collected for a write, reported together so a caller
/// can fix every rejected field in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation.invalid_fields")]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Ok when the collected list is empty, otherwise the full list as an error.
    pub fn check(violations: Vec<Violation>) -> Result<(), ValidationError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
