//! Aggregates computed over fetched rows: ledger totals, per-status
//! breakdowns, and percentages.

use serde::Serialize;
use ts_rs::TS;

use crate::formatting::{format_compact_currency, CurrencyLocale};
use crate::status::FundStatus;

/// Sum ledger amounts exactly.
///
/// Accumulates in `i128`, so the result does not depend on input order;
/// the total saturates at the `i64` bounds.
pub fn sum_amounts<I>(amounts: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let total: i128 = amounts.into_iter().map(i128::from).sum();
    total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// `part / whole` as a whole percentage, rounded half up. Zero when `whole` is 0.
pub fn percentage_of(part: i64, whole: i64) -> u8 {
    if whole <= 0 || part <= 0 {
        return 0;
    }
    let pct = (i128::from(part) * 100 + i128::from(whole) / 2) / i128::from(whole);
    pct.min(100) as u8
}

/// A ledger total for one fund status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FundingShare {
    pub status: FundStatus,
    pub label: String,
    #[ts(type = "number")]
    pub amount: i64,
    pub amount_display: String,
    /// Share of the overall ledger total.
    pub percentage: u8,
}

/// Ledger totals per fund status plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FundingBreakdown {
    #[ts(type = "number")]
    pub total: i64,
    pub total_display: String,
    pub shares: Vec<FundingShare>,
}

impl FundingBreakdown {
    /// Group `(status, amount)` pairs. Entries without a status count toward
    /// the total only.
    pub fn from_entries<I>(entries: I, locale: CurrencyLocale) -> Self
    where
        I: IntoIterator<Item = (Option<FundStatus>, i64)>,
    {
        let entries: Vec<(Option<FundStatus>, i64)> = entries.into_iter().collect();
        let total = sum_amounts(entries.iter().map(|(_, amount)| *amount));

        let shares = FundStatus::ALL
            .iter()
            .map(|status| {
                let amount = sum_amounts(
                    entries
                        .iter()
                        .filter(|(s, _)| *s == Some(*status))
                        .map(|(_, amount)| *amount),
                );
                FundingShare {
                    status: *status,
                    label: status.label().to_string(),
                    amount,
                    amount_display: format_compact_currency(amount, locale),
                    percentage: percentage_of(amount, total),
                }
            })
            .collect();

        Self {
            total,
            total_display: format_compact_currency(total, locale),
            shares,
        }
    }
}
