//! Route definitions for the `/pages` view models.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET /landing         -> landing
/// GET /projects        -> projects
/// GET /project/{id}    -> project_detail
/// GET /dashboard       -> dashboard (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/landing", get(pages::landing))
        .route("/projects", get(pages::projects))
        .route("/project/{id}", get(pages::project_detail))
        .route("/dashboard", get(pages::dashboard))
}
