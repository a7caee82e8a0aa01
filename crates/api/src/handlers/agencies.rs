//! Handlers for the `/agencies` resource.

use axum::extract::State;
use axum::Json;
use projectwatch_db::models::agency::AgencyWithProjectCount;
use projectwatch_db::repositories::AgencyRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/agencies
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AgencyWithProjectCount>>>> {
    let agencies = AgencyRepo::list_with_project_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: agencies }))
}
