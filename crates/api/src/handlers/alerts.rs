//! Handlers for the `/alerts` resource.

use axum::extract::{Path, State};
use axum::Json;
use projectwatch_core::error::CoreError;
use projectwatch_core::types::DbId;
use projectwatch_db::models::alert::Alert;
use projectwatch_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/alerts/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Alert>>> {
    let alert = AlertRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id,
        }))?;
    Ok(Json(DataResponse { data: alert }))
}
