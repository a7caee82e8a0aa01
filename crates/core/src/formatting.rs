//! Display formatting for currency amounts and dates.
//!
//! Currency uses compact notation with at most one fractional digit, the way
//! the dashboard shows totals (`₹3.5K`, `₹12.5Cr`, `$2.8B`). Output depends
//! only on the amount and the locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, Timestamp};

/// Placeholder for dates that have not been set.
pub const DATE_TBD: &str = "TBD";

/// Locale driving currency symbol, compact suffixes, and digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurrencyLocale {
    /// Indian rupees with thousand / lakh / crore suffixes.
    #[default]
    #[serde(rename = "en-IN")]
    EnIn,
    /// US dollars with thousand / million / billion / trillion suffixes.
    #[serde(rename = "en-US")]
    EnUs,
}

/// Compact units as `(divisor, suffix)`, ascending. Past a thousand crore
/// the Indian suffixes stack: `KCr` and `LCr`.
const EN_IN_UNITS: &[(u64, &str)] = &[
    (1_000, "K"),
    (100_000, "L"),
    (10_000_000, "Cr"),
    (10_000_000_000, "KCr"),
    (1_000_000_000_000, "LCr"),
];
const EN_US_UNITS: &[(u64, &str)] = &[
    (1_000, "K"),
    (1_000_000, "M"),
    (1_000_000_000, "B"),
    (1_000_000_000_000, "T"),
];

impl CurrencyLocale {
    pub fn tag(self) -> &'static str {
        match self {
            CurrencyLocale::EnIn => "en-IN",
            CurrencyLocale::EnUs => "en-US",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CurrencyLocale::EnIn => "₹",
            CurrencyLocale::EnUs => "$",
        }
    }

    fn units(self) -> &'static [(u64, &'static str)] {
        match self {
            CurrencyLocale::EnIn => EN_IN_UNITS,
            CurrencyLocale::EnUs => EN_US_UNITS,
        }
    }
}

impl fmt::Display for CurrencyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CurrencyLocale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en-IN" | "en_IN" => Ok(CurrencyLocale::EnIn),
            "en-US" | "en_US" => Ok(CurrencyLocale::EnUs),
            other => Err(CoreError::Validation(format!(
                "Unsupported currency locale '{other}'"
            ))),
        }
    }
}

/// Format an amount (whole currency units) in compact notation.
///
/// Suffixes and rounding follow `Intl.NumberFormat` compact notation with
/// one fractional digit, except that a zero fraction is dropped: `₹12KCr`
/// where Intl prints `₹12.0KCr`.
///
/// # Examples
///
/// ```
/// use projectwatch_core::formatting::{format_compact_currency, CurrencyLocale};
/// assert_eq!(format_compact_currency(3500, CurrencyLocale::EnIn), "₹3.5K");
/// assert_eq!(format_compact_currency(125_000_000, CurrencyLocale::EnIn), "₹12.5Cr");
/// assert_eq!(format_compact_currency(2_800_000_000, CurrencyLocale::EnUs), "$2.8B");
/// assert_eq!(format_compact_currency(0, CurrencyLocale::EnUs), "$0");
/// ```
pub fn format_compact_currency(amount: i64, locale: CurrencyLocale) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let symbol = locale.symbol();
    let units = locale.units();

    let Some(mut idx) = units.iter().rposition(|(div, _)| magnitude >= *div) else {
        return format!("{sign}{symbol}{}", group_digits(magnitude, locale));
    };

    let mut tenths = scaled_tenths(magnitude, units[idx].0);
    // Rounding can carry into the next unit (99,950 -> 100.0K -> 1L).
    if let Some((next_div, _)) = units.get(idx + 1) {
        if tenths >= u128::from(next_div / units[idx].0) * 10 {
            idx += 1;
            tenths = scaled_tenths(magnitude, units[idx].0);
        }
    }

    let whole = (tenths / 10) as u64;
    let fraction = tenths % 10;
    let suffix = units[idx].1;
    if fraction == 0 {
        format!("{sign}{symbol}{}{suffix}", group_digits(whole, locale))
    } else {
        format!("{sign}{symbol}{}.{fraction}{suffix}", group_digits(whole, locale))
    }
}

/// `magnitude / divisor` in tenths, rounded half up, in exact integer math.
fn scaled_tenths(magnitude: u64, divisor: u64) -> u128 {
    let divisor = u128::from(divisor);
    (u128::from(magnitude) * 10 + divisor / 2) / divisor
}

/// Insert thousands separators: `1,234,567` (en-US) or `12,34,567` (en-IN).
pub fn group_digits(value: u64, locale: CurrencyLocale) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = match locale {
        CurrencyLocale::EnIn => 2,
        CurrencyLocale::EnUs => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `Jan 2024`, or [`DATE_TBD`] when absent.
pub fn format_short_date(date: Option<Date>) -> String {
    date.map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| DATE_TBD.to_string())
}

/// `January 15, 2024`, or [`DATE_TBD`] when absent.
pub fn format_full_date(date: Option<Date>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| DATE_TBD.to_string())
}

/// `Mar 15, 2024` for record timestamps (alerts, proofs, ledger entries).
pub fn format_timestamp_date(ts: Timestamp) -> String {
    ts.date_naive().format("%b %-d, %Y").to_string()
}
