//! Access-token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. They are
//! stateless: verification is a pure cryptographic/structural check and
//! never consults the credential store, so a deleted user's unexpired
//! token still verifies. That window closes at expiry and is accepted.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's registration id.
    pub sub: String,
    /// The user's role name (`"user"` or `"admin"`), frozen at issuance.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token generation and validation.
///
/// The secret is injected here at process start; nothing else in the
/// codebase reads it, so deployments and tests can swap it freely.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub token_ttl_hours: i64,
}

/// Default token lifetime in hours.
const DEFAULT_TTL_HOURS: i64 = 24;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `JWT_SECRET`    | **yes**  | --      |
    /// | `JWT_TTL_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let token_ttl_hours: i64 = std::env::var("JWT_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_TTL_HOURS.to_string())
            .parse()
            .expect("JWT_TTL_HOURS must be a valid i64");

        Self {
            secret,
            token_ttl_hours,
        }
    }
}

/// Why a token failed verification.
///
/// Route middleware collapses all three into one generic 401 so the
/// distinction never reaches a caller; it exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token could not be parsed as a JWT at all.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the claims (tampering or wrong secret).
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The signature is fine but the encoded expiry has passed.
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Generate an HS256 token for the given identity and role.
pub fn generate_token(
    registration_id: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_ttl_hours * 3600;

    let claims = Claims {
        sub: registration_id.to_string(),
        role: role.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token and return the embedded [`Claims`] unchanged.
///
/// Checks structure, signature, and expiry -- nothing else. In particular
/// it does not know whether the subject still exists.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
