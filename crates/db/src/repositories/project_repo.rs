//! Repository for the `projects` table.

use projectwatch_core::status::ProjectStatus;
use projectwatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectWithAgency};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, budget, location, agency_id, \
                       start_date, end_date, esg_score, completion_percentage, \
                       created_at, updated_at";

/// Project columns plus the agency name, for queries over `projects p LEFT JOIN agencies a`.
const SUMMARY_COLUMNS: &str = "p.id, p.title, p.description, p.status, p.budget, p.location, \
                               p.agency_id, a.name AS agency_name, p.start_date, p.end_date, \
                               p.esg_score, p.completion_percentage, p.created_at";

const SUMMARY_FROM: &str = "projects p LEFT JOIN agencies a ON a.id = p.agency_id";

/// Provides CRUD and listing operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `pending`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, status, budget, location, agency_id,
                 start_date, end_date, esg_score, completion_percentage)
             VALUES ($1, $2, COALESCE($3, 'pending'), $4, $5, $6, $7, $8, $9, COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(input.budget)
            .bind(&input.location)
            .bind(input.agency_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.esg_score)
            .bind(input.completion_percentage)
            .fetch_one(pool)
            .await
    }

    /// Find a project joined with its agency name.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithAgency>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM {SUMMARY_FROM} WHERE p.id = $1");
        sqlx::query_as::<_, ProjectWithAgency>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All projects with agency names, most recently created first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ProjectWithAgency>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM {SUMMARY_FROM} ORDER BY p.created_at DESC, p.id ASC"
        );
        sqlx::query_as::<_, ProjectWithAgency>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created projects with agency names.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ProjectWithAgency>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM {SUMMARY_FROM}
             ORDER BY p.created_at DESC, p.id ASC
             LIMIT $1"
        );
        sqlx::query_as::<_, ProjectWithAgency>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Projects run by one agency, most recently created first.
    pub async fn list_by_agency(
        pool: &PgPool,
        agency_id: DbId,
    ) -> Result<Vec<ProjectWithAgency>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM {SUMMARY_FROM}
             WHERE p.agency_id = $1
             ORDER BY p.created_at DESC, p.id ASC"
        );
        sqlx::query_as::<_, ProjectWithAgency>(&query)
            .bind(agency_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM projects")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_status(
        pool: &PgPool,
        status: ProjectStatus,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM projects WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }
}
