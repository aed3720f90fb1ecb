pub mod admin;
pub mod auth;
pub mod chat;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chat                    relay a query (user or admin)
///
/// /user/recent-chats       own chat history (user or admin)
/// /user/profile            own public projection (user or admin)
///
/// /admin/users             list users (admin only)
/// /admin/users/{id}        delete user by registration id (admin only)
/// /admin/analytics         store-wide counts (admin only)
/// ```
///
/// `/auth` and `/health` mount separately at the root router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(chat::router())
        .nest("/user", user::router())
        .nest("/admin", admin::router())
}
