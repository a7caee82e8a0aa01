//! Repository for the `proofs` table.

use projectwatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::proof::{CreateProof, Proof, ProofWithContext};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, milestone_id, file_url, comment, uploader, created_at";

/// Provides insert and read operations for proofs.
pub struct ProofRepo;

impl ProofRepo {
    /// Insert a new proof, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProof) -> Result<Proof, sqlx::Error> {
        let query = format!(
            "INSERT INTO proofs (milestone_id, uploader, file_url, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proof>(&query)
            .bind(input.milestone_id)
            .bind(input.uploader)
            .bind(&input.file_url)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Number of proofs uploaded by one user.
    pub async fn count_by_uploader(pool: &PgPool, uploader: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM proofs WHERE uploader = $1")
            .bind(uploader)
            .fetch_one(pool)
            .await
    }

    /// A user's most recent uploads with milestone and project titles.
    pub async fn list_recent_by_uploader(
        pool: &PgPool,
        uploader: DbId,
        limit: i64,
    ) -> Result<Vec<ProofWithContext>, sqlx::Error> {
        sqlx::query_as::<_, ProofWithContext>(
            "SELECT pr.id, pr.file_url, pr.comment, pr.created_at,
                    m.id AS milestone_id, m.title AS milestone_title,
                    p.id AS project_id, p.title AS project_title
             FROM proofs pr
             JOIN milestones m ON m.id = pr.milestone_id
             JOIN projects p ON p.id = m.project_id
             WHERE pr.uploader = $1
             ORDER BY pr.created_at DESC, pr.id ASC
             LIMIT $2",
        )
        .bind(uploader)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
