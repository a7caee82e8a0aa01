use axum::routing::get;
use axum::Router;

use crate::handlers::funds;
use crate::state::AppState;

/// Routes mounted at `/funds`.
///
/// ```text
/// GET /ledger   -> ledger (officer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ledger", get(funds::ledger))
}
