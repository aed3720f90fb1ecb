//! Route definitions for the `/api/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/api/user`.
///
/// ```text
/// GET /recent-chats -> recent_chats (user or admin)
/// GET /profile      -> profile (user or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recent-chats", get(user::recent_chats))
        .route("/profile", get(user::profile))
}
