//! Handlers for the `/milestones` resource: verification and proof upload.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectwatch_core::error::CoreError;
use projectwatch_core::status::MilestoneStatus;
use projectwatch_core::types::DbId;
use projectwatch_db::models::milestone::Milestone;
use projectwatch_db::models::proof::{CreateProof, Proof};
use projectwatch_db::repositories::{MilestoneRepo, ProofRepo};
use serde::Deserialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireOfficer};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /milestones/{id}/verification`.
#[derive(Debug, Deserialize)]
pub struct VerificationRequest {
    /// `verified` or `rejected`.
    pub status: MilestoneStatus,
}

/// Request body for `POST /milestones/{id}/proofs`.
#[derive(Debug, Deserialize)]
pub struct UploadProofRequest {
    pub file_url: Option<String>,
    pub comment: Option<String>,
}

/// PATCH /api/v1/milestones/{id}/verification
///
/// Decides a pending milestone. Anything other than pending to verified or
/// rejected is a 409, including a concurrent decision that landed first.
pub async fn verify(
    State(state): State<AppState>,
    RequireOfficer(officer): RequireOfficer,
    Path(id): Path<DbId>,
    Json(input): Json<VerificationRequest>,
) -> AppResult<Json<DataResponse<Milestone>>> {
    let milestone = find_milestone(&state, id).await?;
    let current = milestone.status()?;

    if !current.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Milestone cannot move from {current} to {}",
            input.status
        ))));
    }

    let updated = MilestoneRepo::transition_status(&state.pool, id, current, input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Milestone was decided by another request".into(),
            ))
        })?;

    tracing::info!(
        milestone_id = %id,
        from = %current,
        to = %input.status,
        officer_id = %officer.user_id,
        "Milestone decided",
    );
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/milestones/{id}/proofs
///
/// The caller is recorded as the uploader.
pub async fn upload_proof(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UploadProofRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Proof>>)> {
    let proof = CreateProof {
        milestone_id: id,
        uploader: user.user_id,
        file_url: input.file_url,
        comment: input.comment,
    };
    validate_input(&proof)?;
    find_milestone(&state, id).await?;

    let created = ProofRepo::create(&state.pool, &proof).await?;
    tracing::info!(proof_id = %created.id, milestone_id = %id, uploader = %user.user_id, "Proof uploaded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

async fn find_milestone(state: &AppState, id: DbId) -> AppResult<Milestone> {
    MilestoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))
}
