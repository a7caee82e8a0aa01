//! Milestone entity model and DTOs.

use projectwatch_core::error::CoreError;
use projectwatch_core::status::MilestoneStatus;
use projectwatch_core::types::{Date, DbId, Timestamp};
use projectwatch_core::views::project_detail::MilestoneRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::not_blank;

/// A milestone row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// One of `pending`, `verified`, `rejected`.
    pub status: String,
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Milestone {
    pub fn status(&self) -> Result<MilestoneStatus, CoreError> {
        self.status.parse()
    }
}

/// A milestone with the number of proofs uploaded against it.
#[derive(Debug, Clone, FromRow)]
pub struct MilestoneWithProofCount {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<Date>,
    pub proof_count: i64,
}

impl TryFrom<MilestoneWithProofCount> for MilestoneRecord {
    type Error = CoreError;

    fn try_from(row: MilestoneWithProofCount) -> Result<Self, Self::Error> {
        Ok(MilestoneRecord {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status.parse()?,
            due_date: row.due_date,
            proof_count: row.proof_count,
        })
    }
}

/// DTO for creating a new milestone. New milestones always start `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMilestone {
    pub project_id: DbId,
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
}
