//! Funds ledger entry model and DTOs.

use projectwatch_core::error::CoreError;
use projectwatch_core::status::FundStatus;
use projectwatch_core::types::{DbId, Timestamp};
use projectwatch_core::views::ledger::LedgerRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `funds_ledger` table. Amounts are whole currency units.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FundsLedgerEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub milestone_id: Option<DbId>,
    pub amount: i64,
    /// One of `allocated`, `released`, `utilized`, or unset.
    pub status: Option<String>,
    pub tx_id: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A ledger entry with its project's title.
#[derive(Debug, Clone, FromRow)]
pub struct LedgerEntryWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub project_title: Option<String>,
    pub amount: i64,
    pub status: Option<String>,
    pub tx_id: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl LedgerEntryWithProject {
    pub fn fund_status(&self) -> Result<Option<FundStatus>, CoreError> {
        parse_fund_status(self.status.as_deref())
    }
}

impl TryFrom<LedgerEntryWithProject> for LedgerRecord {
    type Error = CoreError;

    fn try_from(row: LedgerEntryWithProject) -> Result<Self, Self::Error> {
        let status = row.fund_status()?;
        Ok(LedgerRecord {
            id: row.id,
            project_title: row.project_title,
            amount: row.amount,
            status,
            tx_id: row.tx_id,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

/// Sum of amounts for one ledger status.
#[derive(Debug, Clone, FromRow)]
pub struct StatusTotal {
    pub status: Option<String>,
    pub total: i64,
}

impl StatusTotal {
    pub fn into_entry(self) -> Result<(Option<FundStatus>, i64), CoreError> {
        Ok((parse_fund_status(self.status.as_deref())?, self.total))
    }
}

pub fn parse_fund_status(status: Option<&str>) -> Result<Option<FundStatus>, CoreError> {
    status.map(str::parse).transpose()
}

/// DTO for recording a ledger entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFundsLedgerEntry {
    pub project_id: DbId,
    pub milestone_id: Option<DbId>,
    #[validate(range(min = 0))]
    pub amount: i64,
    pub status: Option<FundStatus>,
    #[validate(length(min = 1, max = 128))]
    pub tx_id: Option<String>,
    pub description: Option<String>,
}
