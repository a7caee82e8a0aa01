//! Dashboard page pieces: role badge, stat cards, alerts, role panels.

use serde::Serialize;
use ts_rs::TS;

use crate::formatting::{format_compact_currency, format_timestamp_date, CurrencyLocale};
use crate::navigation::Route;
use crate::roles::{DashboardTab, UserRole};
use crate::status::AlertSeverity;
use crate::types::{DbId, Timestamp};

/// Placeholder for alerts whose project no longer resolves.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Counts behind the stat cards. Role-specific counts are `None` when the
/// role does not see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: i64,
    pub total_funds: i64,
    pub pending_verifications: Option<i64>,
    pub my_proofs: Option<i64>,
    pub unread_alerts: i64,
}

impl DashboardStats {
    /// Cards in display order: projects, funds, role card (if any), alerts.
    pub fn cards(&self, locale: CurrencyLocale) -> Vec<StatCard> {
        let mut cards = vec![
            StatCard::new("total_projects", "Total Projects", self.total_projects.to_string()),
            StatCard::new(
                "total_funds",
                "Total Funds",
                format_compact_currency(self.total_funds, locale),
            ),
        ];
        if let Some(pending) = self.pending_verifications {
            cards.push(StatCard::new(
                "pending_verifications",
                "Pending Verifications",
                pending.to_string(),
            ));
        }
        if let Some(proofs) = self.my_proofs {
            cards.push(StatCard::new("my_proofs", "My Proofs", proofs.to_string()));
        }
        cards.push(StatCard::new("alerts", "Alerts", self.unread_alerts.to_string()));
        cards
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatCard {
    pub key: String,
    pub title: String,
    pub value: String,
}

impl StatCard {
    fn new(key: &str, title: &str, value: String) -> Self {
        StatCard {
            key: key.to_string(),
            title: title.to_string(),
            value,
        }
    }
}

/// Badge showing the signed-in role, e.g. `GOVERNMENT OFFICER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RoleBadge {
    pub role: Option<UserRole>,
    pub label: String,
}

impl RoleBadge {
    /// Sessions without a role are shown as citizens.
    pub fn for_role(role: Option<UserRole>) -> RoleBadge {
        RoleBadge {
            role,
            label: role.unwrap_or(UserRole::Citizen).badge_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TabView {
    pub tab: DashboardTab,
    pub label: String,
    pub selected: bool,
}

/// Tabs for `role` with `selected` marked.
pub fn tab_views(role: Option<UserRole>, selected: DashboardTab) -> Vec<TabView> {
    DashboardTab::for_role(role)
        .into_iter()
        .map(|tab| TabView {
            tab,
            label: tab.label().to_string(),
            selected: tab == selected,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// An alert as fetched, joined with its project's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub id: DbId,
    pub message: String,
    pub severity: Option<AlertSeverity>,
    pub is_read: bool,
    pub project_id: Option<DbId>,
    pub project_title: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AlertItem {
    pub id: DbId,
    pub message: String,
    /// Missing severities are shown as low.
    pub severity: AlertSeverity,
    pub is_read: bool,
    pub project_title: String,
    pub date: String,
}

impl From<AlertRecord> for AlertItem {
    fn from(alert: AlertRecord) -> Self {
        AlertItem {
            id: alert.id,
            message: alert.message,
            severity: alert.severity.unwrap_or(AlertSeverity::Low),
            is_read: alert.is_read,
            project_title: alert
                .project_title
                .unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
            date: format_timestamp_date(alert.created_at),
        }
    }
}

// ---------------------------------------------------------------------------
// Role panels
// ---------------------------------------------------------------------------

/// A card on the officer's management panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ManagementAction {
    pub title: String,
    pub description: String,
    pub action_label: String,
    pub href: String,
}

/// The officer's management actions.
pub fn management_actions() -> Vec<ManagementAction> {
    [
        (
            "Create Project",
            "Add a new government project",
            "Create New Project",
            "/projects/create",
        ),
        (
            "Verify Milestones",
            "Review and approve project milestones",
            "Review Pending",
            "/verification",
        ),
        (
            "Fund Management",
            "Monitor fund allocation and utilization",
            "View Ledger",
            "/funds/ledger",
        ),
    ]
    .into_iter()
    .map(|(title, description, action_label, href)| ManagementAction {
        title: title.to_string(),
        description: description.to_string(),
        action_label: action_label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

/// A proof the signed-in citizen uploaded, with its milestone and project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRecord {
    pub id: DbId,
    pub file_url: Option<String>,
    pub comment: Option<String>,
    pub milestone_title: String,
    pub project_id: DbId,
    pub project_title: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ContributionItem {
    pub id: DbId,
    pub milestone_title: String,
    pub project_title: String,
    pub project_href: String,
    pub comment: Option<String>,
    pub file_url: Option<String>,
    pub date: String,
}

impl From<ContributionRecord> for ContributionItem {
    fn from(proof: ContributionRecord) -> Self {
        ContributionItem {
            id: proof.id,
            milestone_title: proof.milestone_title,
            project_title: proof.project_title,
            project_href: Route::ProjectDetail(proof.project_id).path(),
            comment: proof.comment,
            file_url: proof.file_url,
            date: format_timestamp_date(proof.created_at),
        }
    }
}
