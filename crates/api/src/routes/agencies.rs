use axum::routing::get;
use axum::Router;

use crate::handlers::agencies;
use crate::state::AppState;

/// Routes mounted at `/agencies`.
///
/// ```text
/// GET /   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(agencies::list))
}
