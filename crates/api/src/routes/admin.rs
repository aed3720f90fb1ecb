//! Route definitions for the `/api/admin` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/api/admin`.
///
/// ```text
/// GET    /users      -> list_users (admin only)
/// DELETE /users/{id} -> delete_user (admin only)
/// GET    /analytics  -> analytics (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/analytics", get(admin::analytics))
}
