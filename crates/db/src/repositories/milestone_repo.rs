//! Repository for the `milestones` table.

use projectwatch_core::status::MilestoneStatus;
use projectwatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::milestone::{CreateMilestone, Milestone, MilestoneWithProofCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, due_date, created_at, updated_at";

/// Provides CRUD operations and status transitions for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new `pending` milestone, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMilestone) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (project_id, title, description, due_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.project_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A project's milestones with the number of proofs on each.
    pub async fn list_for_project_with_proof_counts(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MilestoneWithProofCount>, sqlx::Error> {
        sqlx::query_as::<_, MilestoneWithProofCount>(
            "SELECT m.id, m.title, m.description, m.status, m.due_date,
                    COUNT(pr.id)::BIGINT AS proof_count
             FROM milestones m
             LEFT JOIN proofs pr ON pr.milestone_id = m.id
             WHERE m.project_id = $1
             GROUP BY m.id
             ORDER BY m.due_date ASC NULLS LAST, m.title ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM milestones")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_status(
        pool: &PgPool,
        status: MilestoneStatus,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM milestones WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Move a milestone from `from` to `to`.
    ///
    /// The update only applies while the row still has status `from`, so
    /// concurrent decisions on the same milestone cannot both succeed.
    /// Returns `None` if the row is missing or no longer in `from`.
    pub async fn transition_status(
        pool: &PgPool,
        id: DbId,
        from: MilestoneStatus,
        to: MilestoneStatus,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET status = $3
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(pool)
            .await
    }
}
