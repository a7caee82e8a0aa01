//! Repository for the `agencies` table.

use sqlx::PgPool;

use crate::models::agency::{Agency, AgencyWithProjectCount, CreateAgency};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, reputation_score, created_at, updated_at";

/// Provides CRUD operations for agencies.
pub struct AgencyRepo;

impl AgencyRepo {
    /// Insert a new agency, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAgency) -> Result<Agency, sqlx::Error> {
        let query = format!(
            "INSERT INTO agencies (name, reputation_score)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
            .bind(input.name.trim())
            .bind(input.reputation_score)
            .fetch_one(pool)
            .await
    }

    /// List agencies alphabetically with the number of projects each runs.
    pub async fn list_with_project_counts(
        pool: &PgPool,
    ) -> Result<Vec<AgencyWithProjectCount>, sqlx::Error> {
        sqlx::query_as::<_, AgencyWithProjectCount>(
            "SELECT a.id, a.name, a.reputation_score, COUNT(p.id)::BIGINT AS project_count
             FROM agencies a
             LEFT JOIN projects p ON p.agency_id = a.id
             GROUP BY a.id
             ORDER BY a.name ASC, a.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM agencies")
            .fetch_one(pool)
            .await
    }
}
