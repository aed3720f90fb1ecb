//! Handlers for the `/api/admin` resource (user management, analytics).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use archon_core::error::CoreError;
use archon_core::roles::{ROLE_ADMIN, ROLE_USER};
use archon_db::models::user::UserResponse;
use archon_db::repositories::{ChatRecordRepo, UserRepo};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/admin/users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersListResponse {
    pub total_users: i64,
    pub users: Vec<UserResponse>,
}

/// Response body for `DELETE /api/admin/users/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUserResponse {
    pub registration_id: String,
    pub role: String,
}

/// Response body for `GET /api/admin/analytics`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_users: i64,
    pub total_admins: i64,
    pub total_chats: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/users
///
/// All users, newest first, as public projections (the hash never
/// crosses this boundary).
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<UsersListResponse>> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(UsersListResponse {
        total_users: users.len() as i64,
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

/// DELETE /api/admin/users/{id}
///
/// Delete a user by registration id. An admin cannot delete its own
/// account; the user's chat records go with the row via cascade.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(registration_id): Path<String>,
) -> AppResult<Json<DeletedUserResponse>> {
    if registration_id == admin.registration_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot delete your own account".into(),
        )));
    }

    let deleted = UserRepo::delete_by_registration_id(&state.pool, &registration_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                key: registration_id.clone(),
            })
        })?;

    tracing::info!(
        registration_id = %deleted.registration_id,
        deleted_by = %admin.registration_id,
        "User deleted"
    );

    Ok(Json(DeletedUserResponse {
        registration_id: deleted.registration_id,
        role: deleted.role,
    }))
}

/// GET /api/admin/analytics
///
/// Live counts from the store (no sampling, no caching; the tables are
/// small enough that COUNT is fine here).
pub async fn analytics(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<AnalyticsResponse>> {
    let total_users = UserRepo::count_by_role(&state.pool, ROLE_USER).await?;
    let total_admins = UserRepo::count_by_role(&state.pool, ROLE_ADMIN).await?;
    let total_chats = ChatRecordRepo::count_all(&state.pool).await?;

    Ok(Json(AnalyticsResponse {
        total_users,
        total_admins,
        total_chats,
    }))
}
