use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AccessError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, field_violations};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, fields) = match &self {
            ProductError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(field_violations(&err.violations)),
            ),
            ProductError::Access(AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError", None)
            }
            ProductError::Access(AccessError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "AuthorizationError", None)
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            ProductError::Duplicated => (StatusCode::CONFLICT, "Conflict", None),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None)
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
                fields,
            }),
        )
    }
}
