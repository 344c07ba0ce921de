use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::Lazy;
use poem::{FromRequest, Request, RequestBody};
use poem_openapi::auth::{Bearer, BearerAuthorization};
use poem_openapi::error::AuthorizationError;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::auth::model::Principal;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ApiClaims {
    sub: String,
    username: String,
    #[serde(default)]
    is_staff: bool,
    exp: usize,
}

static DECODING_KEY: Lazy<DecodingKey> =
    Lazy::new(|| DecodingKey::from_secret(AuthConfig::from_env().jwt_secret.as_bytes()));

fn principal_from_token(token: &str, key: &DecodingKey) -> Result<Principal, String> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<ApiClaims>(token, key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| "auth.invalid_subject")?;

    Ok(Principal::known(
        id,
        token_data.claims.username,
        token_data.claims.is_staff,
    ))
}

/// Bearer token authentication (JWT, HS256, issued externally)
///
/// Handlers take `Option<BearerAuth>`: a missing or rejected token leaves
/// the caller anonymous, and the use cases answer anonymous callers with
/// 401. That keeps every access decision in the business layer.
///
/// Extraction is a hand-written `FromRequest` impl rather than the
/// `SecurityScheme` derive: the derive's `ApiExtractor` impl does not
/// support `Option`-wrapped schemes (and would conflict with the blanket
/// impl used for `Option<T>`). The extraction path below mirrors what the
/// derive generates for `ty = "bearer"` with `checker = "bearer_checker"`.
pub struct BearerAuth(pub Principal);

impl<'a> FromRequest<'a> for BearerAuth {
    async fn from_request(req: &'a Request, _body: &mut RequestBody) -> poem::Result<Self> {
        let bearer = <Bearer as BearerAuthorization>::from_request(req)?;
        match bearer_checker(req, bearer).await {
            Some(principal) => Ok(BearerAuth(principal)),
            None => Err(AuthorizationError.into()),
        }
    }
}

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Principal> {
    match principal_from_token(&bearer.token, &DECODING_KEY) {
        Ok(principal) => Some(principal),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

pub fn principal_of(auth: Option<BearerAuth>) -> Principal {
    auth.map(|a| a.0).unwrap_or(Principal::Anonymous)
}
