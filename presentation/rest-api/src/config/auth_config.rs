/// Settings for verifying bearer tokens. Tokens are issued by an external
/// identity service that shares this secret.
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        Self { jwt_secret }
    }
}
