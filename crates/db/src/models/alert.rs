//! Alert entity model and DTOs.

use projectwatch_core::error::CoreError;
use projectwatch_core::status::AlertSeverity;
use projectwatch_core::types::{DbId, Timestamp};
use projectwatch_core::views::dashboard::AlertRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::not_blank;

/// An alert row from the `alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub message: String,
    pub severity: Option<String>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// An alert with its project's title from a `LEFT JOIN`.
#[derive(Debug, Clone, FromRow)]
pub struct AlertWithProject {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub project_title: Option<String>,
    pub message: String,
    pub severity: Option<String>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

impl TryFrom<AlertWithProject> for AlertRecord {
    type Error = CoreError;

    fn try_from(row: AlertWithProject) -> Result<Self, Self::Error> {
        Ok(AlertRecord {
            id: row.id,
            message: row.message,
            severity: row.severity.as_deref().map(str::parse).transpose()?,
            is_read: row.is_read,
            project_id: row.project_id,
            project_title: row.project_title,
            created_at: row.created_at,
        })
    }
}

/// DTO for raising an alert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlert {
    pub project_id: Option<DbId>,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    pub severity: Option<AlertSeverity>,
}
