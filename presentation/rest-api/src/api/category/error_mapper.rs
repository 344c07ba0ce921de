use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AccessError;
use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, field_violations};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, fields) = match &self {
            CategoryError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(field_violations(&err.violations)),
            ),
            CategoryError::Access(AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError", None)
            }
            CategoryError::Access(AccessError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "AuthorizationError", None)
            }
            CategoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            CategoryError::Duplicated | CategoryError::InUse => {
                (StatusCode::CONFLICT, "Conflict", None)
            }
            CategoryError::Repository(_) => {
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
