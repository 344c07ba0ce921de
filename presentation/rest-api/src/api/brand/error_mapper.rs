use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AccessError;
use business::domain::brand::errors::BrandError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, field_violations};

impl IntoErrorResponse for BrandError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, fields) = match &self {
            BrandError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(field_violations(&err.violations)),
            ),
            BrandError::Access(AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError", None)
            }
            BrandError::Access(AccessError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "AuthorizationError", None)
            }
            BrandError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            BrandError::Duplicated | BrandError::InUse => (StatusCode::CONFLICT, "Conflict", None),
            BrandError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None),
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
