//! Project card shown in listings and the dashboard's recent projects.

use serde::Serialize;
use ts_rs::TS;

use crate::formatting::{format_compact_currency, format_short_date, CurrencyLocale};
use crate::navigation::Route;
use crate::project::ProjectSummary;
use crate::status::ProjectStatus;
use crate::types::DbId;

/// Shown when a project has no budget on record.
pub const BUDGET_UNDISCLOSED: &str = "Not disclosed";
/// Shown when a project has no location on record.
pub const LOCATION_TBD: &str = "Location TBD";

/// Status badge: label plus a tone key the client maps to a colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatusBadge {
    pub label: String,
    /// `status-active`, `status-pending`, `status-completed`, `status-delayed`.
    pub tone: String,
}

impl From<ProjectStatus> for StatusBadge {
    fn from(status: ProjectStatus) -> Self {
        StatusBadge {
            label: status.label().to_string(),
            tone: format!("status-{}", status.display_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProjectCard {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Filter key (`active`, `pending`, ...).
    pub status: String,
    pub badge: StatusBadge,
    pub esg_score: u8,
    /// Completion in `[0, 100]`; also the progress bar width.
    pub completion: u8,
    pub budget: String,
    pub agency: String,
    pub location: String,
    /// `Jan 2024` or `TBD`.
    pub start_date: String,
    pub detail_href: String,
}

impl ProjectCard {
    pub fn from_summary(project: &ProjectSummary, locale: CurrencyLocale) -> ProjectCard {
        ProjectCard {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status.display_key().to_string(),
            badge: project.status.into(),
            esg_score: project.esg(),
            completion: project.completion(),
            budget: project
                .budget
                .map(|b| format_compact_currency(b, locale))
                .unwrap_or_else(|| BUDGET_UNDISCLOSED.to_string()),
            agency: project.agency_display().to_string(),
            location: project
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| LOCATION_TBD.to_string()),
            start_date: format_short_date(project.start_date),
            detail_href: Route::ProjectDetail(project.id).path(),
        }
    }
}
