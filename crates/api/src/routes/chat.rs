//! Route definition for the chat relay.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes merged into `/api`.
///
/// ```text
/// POST /chat -> chat (user or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat::chat))
}
