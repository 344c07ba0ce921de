use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AccessError;
use business::domain::sector::errors::SectorError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, field_violations};

impl IntoErrorResponse for SectorError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, fields) = match &self {
            SectorError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(field_violations(&err.violations)),
            ),
            SectorError::Access(AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError", None)
            }
            SectorError::Access(AccessError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "AuthorizationError", None)
            }
            SectorError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            SectorError::Duplicated => (StatusCode::CONFLICT, "Conflict", None),
            SectorError::Repository(_) => {
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
