//! Handlers for the `/api/user` resource (own history, own profile).

use archon_core::error::CoreError;
use archon_db::models::chat_record::ChatRecordResponse;
use archon_db::models::user::UserResponse;
use archon_db::repositories::{ChatRecordRepo, UserRepo};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireMember;
use crate::state::AppState;

/// Response body for `GET /api/user/recent-chats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentChatsResponse {
    pub recent_chats: Vec<ChatRecordResponse>,
}

/// GET /api/user/recent-chats
///
/// The caller's own history, bounded by the configured limit, oldest
/// first. There is no way to read another identity's history through
/// this route -- deliberately, admins included.
pub async fn recent_chats(
    State(state): State<AppState>,
    RequireMember(user): RequireMember,
) -> AppResult<Json<RecentChatsResponse>> {
    let account = UserRepo::find_by_registration_id(&state.pool, &user.registration_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let records =
        ChatRecordRepo::recent_for_user(&state.pool, account.id, state.config.recent_chats_limit)
            .await?;

    Ok(Json(RecentChatsResponse {
        recent_chats: records.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/user/profile
///
/// The caller's public projection. The hash never leaves the store layer.
pub async fn profile(
    State(state): State<AppState>,
    RequireMember(user): RequireMember,
) -> AppResult<Json<UserResponse>> {
    let account = UserRepo::find_by_registration_id(&state.pool, &user.registration_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                key: user.registration_id.clone(),
            })
        })?;

    Ok(Json(UserResponse::from(&account)))
}
