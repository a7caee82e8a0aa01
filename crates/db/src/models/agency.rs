//! Agency entity model and DTOs.

use projectwatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::not_blank;

/// An agency row from the `agencies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Agency {
    pub id: DbId,
    pub name: String,
    pub reputation_score: Option<i16>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An agency with the number of projects it runs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AgencyWithProjectCount {
    pub id: DbId,
    pub name: String,
    pub reputation_score: Option<i16>,
    pub project_count: i64,
}

/// DTO for creating a new agency.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAgency {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: String,
    #[validate(range(min = 0, max = 100))]
    pub reputation_score: Option<i16>,
}
