//! JWT-based authentication extractor for Axum handlers.

use archon_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Verified identity extracted from a `Authorization: Bearer <token>`
/// header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(registration_id = %user.registration_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Verification happens exactly once, here. Handlers never re-parse the
/// token; the compact form is carried in `bearer` only so the chat relay
/// can forward the caller's credential upstream.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The registration id from the verified `sub` claim.
    pub registration_id: String,
    /// The role claim as issued at login.
    pub role: String,
    /// Issued-at claim (UTC Unix timestamp).
    pub issued_at: i64,
    /// Expiry claim (UTC Unix timestamp).
    pub expires_at: i64,
    /// The verified compact token, for upstream forwarding.
    pub bearer: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        // Malformed, bad signature, and expired all collapse into the same
        // caller-visible message; the precise cause is logged only.
        let claims = verify_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            registration_id: claims.sub,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
            bearer: token.to_string(),
        })
    }
}
