use axum::routing::post;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// POST /{id}/read   -> mark_read (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/read", post(alerts::mark_read))
}
