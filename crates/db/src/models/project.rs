//! Project entity model and DTOs.

use projectwatch_core::error::CoreError;
use projectwatch_core::project::ProjectSummary;
use projectwatch_core::status::ProjectStatus;
use projectwatch_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::not_blank;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// One of `pending`, `ongoing`, `completed`, `delayed`.
    pub status: String,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub agency_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub esg_score: Option<i16>,
    pub completion_percentage: Option<i16>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row with its agency's name from a `LEFT JOIN`.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectWithAgency {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub agency_id: Option<DbId>,
    pub agency_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub esg_score: Option<i16>,
    pub completion_percentage: Option<i16>,
    pub created_at: Timestamp,
}

impl TryFrom<ProjectWithAgency> for ProjectSummary {
    type Error = CoreError;

    fn try_from(row: ProjectWithAgency) -> Result<Self, Self::Error> {
        Ok(ProjectSummary {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status.parse()?,
            budget: row.budget,
            location: row.location,
            agency_id: row.agency_id,
            agency_name: row.agency_name,
            start_date: row.start_date,
            end_date: row.end_date,
            esg_score: row.esg_score,
            completion_percentage: row.completion_percentage,
            created_at: row.created_at,
        })
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_date_order"))]
pub struct CreateProject {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `pending` if omitted.
    pub status: Option<ProjectStatus>,
    #[validate(range(min = 0))]
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub agency_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[validate(range(min = 0, max = 100))]
    pub esg_score: Option<i16>,
    #[validate(range(min = 0, max = 100))]
    pub completion_percentage: Option<i16>,
}

fn validate_date_order(input: &CreateProject) -> Result<(), ValidationError> {
    match (input.start_date, input.end_date) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::new("date_order")
            .with_message("end_date must not precede start_date".into())),
        _ => Ok(()),
    }
}
