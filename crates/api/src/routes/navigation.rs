use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// `GET /navigation -> navbar`, merged at the API root.
pub fn router() -> Router<AppState> {
    Router::new().route("/navigation", get(navigation::navbar))
}
