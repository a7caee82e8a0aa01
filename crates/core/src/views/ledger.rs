//! Funds ledger page: every entry with its project, plus per-status totals.

use serde::Serialize;
use ts_rs::TS;

use crate::aggregate::FundingBreakdown;
use crate::formatting::{format_compact_currency, format_timestamp_date, CurrencyLocale};
use crate::status::FundStatus;
use crate::types::{DbId, Timestamp};
use crate::views::dashboard::UNKNOWN_PROJECT;

/// A ledger entry as fetched, joined with its project's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    pub id: DbId,
    pub project_title: Option<String>,
    pub amount: i64,
    pub status: Option<FundStatus>,
    pub tx_id: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LedgerEntryItem {
    pub id: DbId,
    pub project_title: String,
    #[ts(type = "number")]
    pub amount: i64,
    pub amount_display: String,
    pub status: Option<FundStatus>,
    /// `Unrecorded` when the entry carries no status.
    pub status_label: String,
    pub tx_id: Option<String>,
    pub description: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LedgerView {
    pub entries: Vec<LedgerEntryItem>,
    pub breakdown: FundingBreakdown,
}

impl LedgerView {
    /// Entries keep the fetched order (newest first).
    pub fn build(records: Vec<LedgerRecord>, locale: CurrencyLocale) -> LedgerView {
        let breakdown =
            FundingBreakdown::from_entries(records.iter().map(|r| (r.status, r.amount)), locale);
        let entries = records
            .into_iter()
            .map(|r| LedgerEntryItem {
                id: r.id,
                project_title: r.project_title.unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
                amount: r.amount,
                amount_display: format_compact_currency(r.amount, locale),
                status: r.status,
                status_label: r
                    .status
                    .map(|s| s.label().to_string())
                    .unwrap_or_else(|| "Unrecorded".to_string()),
                tx_id: r.tx_id,
                description: r.description,
                date: format_timestamp_date(r.created_at),
            })
            .collect();
        LedgerView { entries, breakdown }
    }
}
