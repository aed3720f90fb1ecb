//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and carries an explicit allowed-role
//! set. Naming the extractor in a handler signature attaches the gate to
//! that route; there are no ad-hoc role comparisons inside handlers.

use archon_core::error::CoreError;
use archon_core::roles::{ROLE_ADMIN, ROLE_USER};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Roles allowed through [`RequireMember`].
const MEMBER_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Roles allowed through [`RequireAdmin`].
const ADMIN_ROLES: &[&str] = &[ROLE_ADMIN];

/// Reject the request with 403 unless the verified role is in `allowed`.
///
/// Failure has no side effects; nothing is attached to the request.
fn ensure_role(user: &AuthUser, allowed: &[&str]) -> Result<(), AppError> {
    if allowed.contains(&user.role.as_str()) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Access denied. Required role: {}",
            allowed.join(" or ")
        ))))
    }
}

/// Requires the `user` or `admin` role -- the chat-capable identities.
///
/// ```ignore
/// async fn chat(RequireMember(user): RequireMember) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireMember(pub AuthUser);

impl FromRequestParts<AppState> for RequireMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_role(&user, MEMBER_ROLES)?;
        Ok(RequireMember(user))
    }
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin.role is guaranteed to be "admin" here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_role(&user, ADMIN_ROLES)?;
        Ok(RequireAdmin(user))
    }
}
