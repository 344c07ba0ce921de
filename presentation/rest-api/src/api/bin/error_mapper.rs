use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AccessError;
use business::domain::bin::errors::BinError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, field_violations};

impl IntoErrorResponse for BinError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, fields) = match &self {
            BinError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(field_violations(&err.violations)),
            ),
            BinError::Access(AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError", None)
            }
            BinError::Access(AccessError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "AuthorizationError", None)
            }
            BinError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            BinError::Duplicated => (StatusCode::CONFLICT, "Conflict", None),
            BinError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None),
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
