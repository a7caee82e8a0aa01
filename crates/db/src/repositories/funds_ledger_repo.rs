//! Repository for the `funds_ledger` table.

use projectwatch_core::status::FundStatus;
use projectwatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::funds_ledger::{
    CreateFundsLedgerEntry, FundsLedgerEntry, LedgerEntryWithProject, StatusTotal,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, milestone_id, amount, status, tx_id, description, created_at";

/// Provides insert and aggregate reads over the funds ledger.
pub struct FundsLedgerRepo;

impl FundsLedgerRepo {
    /// Record a ledger entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFundsLedgerEntry,
    ) -> Result<FundsLedgerEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO funds_ledger (project_id, milestone_id, amount, status, tx_id, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FundsLedgerEntry>(&query)
            .bind(input.project_id)
            .bind(input.milestone_id)
            .bind(input.amount)
            .bind(input.status.map(FundStatus::as_str))
            .bind(&input.tx_id)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Every ledger amount. Summed by the caller.
    pub async fn list_amounts(pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT amount FROM funds_ledger")
            .fetch_all(pool)
            .await
    }

    /// Every entry with its project's title, newest first.
    pub async fn list_with_projects(
        pool: &PgPool,
    ) -> Result<Vec<LedgerEntryWithProject>, sqlx::Error> {
        sqlx::query_as::<_, LedgerEntryWithProject>(
            "SELECT f.id, f.project_id, p.title AS project_title, f.amount, f.status,
                    f.tx_id, f.description, f.created_at
             FROM funds_ledger f
             LEFT JOIN projects p ON p.id = f.project_id
             ORDER BY f.created_at DESC, f.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Ledger totals for one project, grouped by status.
    pub async fn totals_by_status_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<StatusTotal>, sqlx::Error> {
        sqlx::query_as::<_, StatusTotal>(
            "SELECT status, COALESCE(SUM(amount), 0)::BIGINT AS total
             FROM funds_ledger
             WHERE project_id = $1
             GROUP BY status",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
