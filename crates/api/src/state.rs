use std::sync::Arc;

use projectwatch_core::session::SessionContext;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: projectwatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Active sessions. Written only by the sign-in / sign-out handlers.
    pub sessions: Arc<SessionContext>,
}
