//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use projectwatch_db::models::project::{CreateProject, Project};
use projectwatch_db::repositories::ProjectRepo;

use crate::error::{validate_input, AppResult};
use crate::middleware::rbac::RequireOfficer;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    RequireOfficer(officer): RequireOfficer,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_input(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, created_by = %officer.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}
