//! Landing page hero banner.
//!
//! The copy is static; the stat tiles are filled from live counts.

use serde::Serialize;
use ts_rs::TS;

use crate::formatting::{format_compact_currency, group_digits, CurrencyLocale};
use crate::navigation::Route;

const HEADLINE: &str = "Government Transparency Made Simple";
const TAGLINE: &str = "Monitor public projects, track government spending, and ensure \
accountability with our comprehensive platform designed for citizens, agencies, and officials.";
const FEATURES: [&str; 4] = [
    "Real-time project monitoring",
    "Transparent fund tracking",
    "Multi-level verification",
    "ESG impact measurement",
];

/// Live numbers behind the hero stat tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingStats {
    pub active_projects: i64,
    pub funds_tracked: i64,
    pub agencies: i64,
    /// Verified share of all milestones, `0..=100`.
    pub verification_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatTile {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct HeroSection {
    pub badge: String,
    pub headline: String,
    pub tagline: String,
    pub features: Vec<String>,
    pub primary_action: CallToAction,
    pub secondary_action: CallToAction,
    pub stats: Vec<StatTile>,
}

impl HeroSection {
    pub fn build(stats: LandingStats, locale: CurrencyLocale) -> HeroSection {
        let agencies = group_digits(stats.agencies.max(0) as u64, locale);
        HeroSection {
            badge: format!("Trusted by {agencies} Government Agencies"),
            headline: HEADLINE.to_string(),
            tagline: TAGLINE.to_string(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            primary_action: CallToAction {
                label: "View Projects".to_string(),
                href: Route::Projects.path(),
            },
            secondary_action: CallToAction {
                label: "Open Dashboard".to_string(),
                href: Route::Dashboard.path(),
            },
            stats: vec![
                StatTile {
                    label: "Active Projects".to_string(),
                    value: group_digits(stats.active_projects.max(0) as u64, locale),
                },
                StatTile {
                    label: "Funds Tracked".to_string(),
                    value: format_compact_currency(stats.funds_tracked, locale),
                },
                StatTile {
                    label: "Government Agencies".to_string(),
                    value: agencies,
                },
                StatTile {
                    label: "Verification Rate".to_string(),
                    value: format!("{}%", stats.verification_rate),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_tiles_from_live_counts() {
        let hero = HeroSection::build(
            LandingStats {
                active_projects: 1247,
                funds_tracked: 2_800_000_000,
                agencies: 156,
                verification_rate: 94,
            },
            CurrencyLocale::EnUs,
        );
        let values: Vec<&str> = hero.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["1,247", "$2.8B", "156", "94%"]);
        assert_eq!(hero.badge, "Trusted by 156 Government Agencies");
        assert_eq!(hero.primary_action.href, "/projects");
        assert_eq!(hero.features.len(), 4);
    }

    #[test]
    fn degraded_stats_render_zeros() {
        let hero = HeroSection::build(LandingStats::default(), CurrencyLocale::EnIn);
        let values: Vec<&str> = hero.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["0", "₹0", "0", "0%"]);
    }
}
