use std::sync::Arc;

use archon_relay::AssistantClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). There is no other cross-request state: the handlers are
/// stateless and correctness rests on the store's per-row atomicity.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: archon_db::DbPool,
    /// Server configuration, including the signing secret.
    pub config: Arc<ServerConfig>,
    /// Client for the external assistant service.
    pub assistant: Arc<AssistantClient>,
}
