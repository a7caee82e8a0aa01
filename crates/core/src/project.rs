//! The project listing record shared by filtering, sorting, and the views.

use crate::status::ProjectStatus;
use crate::types::{Date, DbId, Timestamp};

/// Placeholder shown when a project has no linked agency.
pub const UNKNOWN_AGENCY: &str = "Unknown Agency";

/// A project joined with its agency's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// Whole currency units.
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub agency_id: Option<DbId>,
    pub agency_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub esg_score: Option<i16>,
    pub completion_percentage: Option<i16>,
    pub created_at: Timestamp,
}

impl ProjectSummary {
    /// Agency name, or [`UNKNOWN_AGENCY`] when the project has none.
    pub fn agency_display(&self) -> &str {
        match self.agency_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_AGENCY,
        }
    }

    /// Completion percentage clamped to `[0, 100]`; missing counts as 0.
    pub fn completion(&self) -> u8 {
        clamp_percentage(self.completion_percentage)
    }

    /// ESG score clamped to `[0, 100]`; missing counts as 0.
    pub fn esg(&self) -> u8 {
        clamp_percentage(self.esg_score)
    }
}

pub(crate) fn clamp_percentage(value: Option<i16>) -> u8 {
    value.unwrap_or(0).clamp(0, 100) as u8
}
