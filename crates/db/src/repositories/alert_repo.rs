//! Repository for the `alerts` table.

use projectwatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{Alert, AlertWithProject, CreateAlert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, message, severity, is_read, created_at";

const WITH_PROJECT_COLUMNS: &str = "al.id, al.project_id, p.title AS project_title, \
                                    al.message, al.severity, al.is_read, al.created_at";

/// Provides insert, listing, and read-marking for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new unread alert, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (project_id, message, severity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(input.project_id)
            .bind(input.message.trim())
            .bind(input.severity.map(|s| s.as_str()))
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent alerts with project titles.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<AlertWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PROJECT_COLUMNS}
             FROM alerts al
             LEFT JOIN projects p ON p.id = al.project_id
             ORDER BY al.created_at DESC, al.id ASC
             LIMIT $1"
        );
        sqlx::query_as::<_, AlertWithProject>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All alerts raised against one project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<AlertWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PROJECT_COLUMNS}
             FROM alerts al
             LEFT JOIN projects p ON p.id = al.project_id
             WHERE al.project_id = $1
             ORDER BY al.created_at DESC, al.id ASC"
        );
        sqlx::query_as::<_, AlertWithProject>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM alerts WHERE NOT is_read")
            .fetch_one(pool)
            .await
    }

    /// Mark an alert read. Returns `None` if no such alert exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts SET is_read = TRUE
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
