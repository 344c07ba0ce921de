use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::validation::Violation;

/// One rejected field in a validation failure.
#[derive(Object, Debug)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field details, present on validation failures only.
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<FieldViolation>>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn field_violations(violations: &[Violation]) -> Vec<FieldViolation> {
    violations
        .iter()
        .map(|v| FieldViolation {
            field: v.field.to_string(),
            message: v.message.to_string(),
        })
        .collect()
}

/// Body for ids that do not parse as UUIDs, before any use case runs.
pub fn invalid_id(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
        fields: None,
    })
}

/// Body for a single request value that fails to parse, before any use
/// case runs. Money strings mostly.
pub fn invalid_field(field: &str, message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
        fields: Some(vec![FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        }]),
    })
}
