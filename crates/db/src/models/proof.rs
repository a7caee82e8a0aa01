//! Proof entity model and DTOs.

use projectwatch_core::types::{DbId, Timestamp};
use projectwatch_core::views::dashboard::ContributionRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A proof row from the `proofs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proof {
    pub id: DbId,
    pub milestone_id: DbId,
    pub file_url: Option<String>,
    pub comment: Option<String>,
    pub uploader: Option<DbId>,
    pub created_at: Timestamp,
}

/// A proof with the milestone and project it was uploaded against.
#[derive(Debug, Clone, FromRow)]
pub struct ProofWithContext {
    pub id: DbId,
    pub file_url: Option<String>,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub milestone_id: DbId,
    pub milestone_title: String,
    pub project_id: DbId,
    pub project_title: String,
}

impl From<ProofWithContext> for ContributionRecord {
    fn from(row: ProofWithContext) -> Self {
        ContributionRecord {
            id: row.id,
            file_url: row.file_url,
            comment: row.comment,
            milestone_title: row.milestone_title,
            project_id: row.project_id,
            project_title: row.project_title,
            created_at: row.created_at,
        }
    }
}

/// DTO for uploading a proof. At least one of `file_url` or `comment` is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_has_content"))]
pub struct CreateProof {
    pub milestone_id: DbId,
    pub uploader: DbId,
    #[validate(url)]
    pub file_url: Option<String>,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

fn validate_has_content(input: &CreateProof) -> Result<(), ValidationError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if present(&input.file_url) || present(&input.comment) {
        Ok(())
    } else {
        Err(ValidationError::new("empty_proof")
            .with_message("a proof needs a file_url or a comment".into()))
    }
}
