//! Route definitions for the `/milestones` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::milestones;
use crate::state::AppState;

/// Routes mounted at `/milestones`.
///
/// ```text
/// PATCH /{id}/verification   -> verify (officer)
/// POST  /{id}/proofs         -> upload_proof (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/verification", patch(milestones::verify))
        .route("/{id}/proofs", post(milestones::upload_proof))
}
