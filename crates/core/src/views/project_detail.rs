//! Project detail page pieces: header, milestone timeline, budget usage.

use serde::Serialize;
use ts_rs::TS;

use crate::aggregate::percentage_of;
use crate::formatting::{format_full_date, format_short_date, CurrencyLocale};
use crate::navigation::Route;
use crate::project::ProjectSummary;
use crate::status::MilestoneStatus;
use crate::types::{Date, DbId};
use crate::views::project_card::ProjectCard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProjectHeader {
    #[serde(flatten)]
    pub card: ProjectCard,
    /// `January 15, 2024` or `TBD`.
    pub start_date_full: String,
    pub end_date_full: String,
    pub back_href: String,
}

impl ProjectHeader {
    pub fn build(project: &ProjectSummary, locale: CurrencyLocale) -> ProjectHeader {
        ProjectHeader {
            card: ProjectCard::from_summary(project, locale),
            start_date_full: format_full_date(project.start_date),
            end_date_full: format_full_date(project.end_date),
            back_href: Route::Projects.path(),
        }
    }
}

/// A milestone as fetched, with the number of proofs attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneRecord {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: MilestoneStatus,
    pub due_date: Option<Date>,
    pub proof_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MilestoneItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: MilestoneStatus,
    pub status_label: String,
    /// `Mar 2024` or `TBD`.
    pub due: String,
    #[ts(type = "number")]
    pub proof_count: i64,
}

/// Timeline entries ordered by due date; undated milestones come last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MilestoneTimeline {
    pub items: Vec<MilestoneItem>,
    pub verified: usize,
    pub pending: usize,
    pub rejected: usize,
    /// Verified share of all milestones.
    pub verified_percentage: u8,
}

impl MilestoneTimeline {
    pub fn build(mut milestones: Vec<MilestoneRecord>) -> MilestoneTimeline {
        milestones.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        });

        let count = |status: MilestoneStatus| milestones.iter().filter(|m| m.status == status).count();
        let verified = count(MilestoneStatus::Verified);
        let pending = count(MilestoneStatus::Pending);
        let rejected = count(MilestoneStatus::Rejected);
        let verified_percentage = percentage_of(verified as i64, milestones.len() as i64);

        let items = milestones
            .into_iter()
            .map(|m| MilestoneItem {
                id: m.id,
                title: m.title,
                description: m.description,
                status: m.status,
                status_label: m.status.label().to_string(),
                due: format_short_date(m.due_date),
                proof_count: m.proof_count,
            })
            .collect();

        MilestoneTimeline {
            items,
            verified,
            pending,
            rejected,
            verified_percentage,
        }
    }
}

/// Utilized funds as a share of the project's budget. Zero without a budget.
pub fn budget_utilization(utilized: i64, budget: Option<i64>) -> u8 {
    budget.map(|b| percentage_of(utilized, b)).unwrap_or(0)
}
