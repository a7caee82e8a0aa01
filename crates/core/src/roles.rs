//! User roles and the dashboard panels each role may see.
//!
//! Role names must match the CHECK constraint on `user_roles.role`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const ROLE_GOVERNMENT_OFFICER: &str = "government_officer";
pub const ROLE_AGENCY: &str = "agency";
pub const ROLE_CITIZEN: &str = "citizen";

/// A role assigned to a user server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    GovernmentOfficer,
    Agency,
    Citizen,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::GovernmentOfficer => ROLE_GOVERNMENT_OFFICER,
            UserRole::Agency => ROLE_AGENCY,
            UserRole::Citizen => ROLE_CITIZEN,
        }
    }

    /// Upper-cased badge label, e.g. `GOVERNMENT OFFICER`.
    pub fn badge_label(self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    /// Precedence used when a user holds several roles. Lower wins.
    fn precedence(self) -> u8 {
        match self {
            UserRole::GovernmentOfficer => 0,
            UserRole::Agency => 1,
            UserRole::Citizen => 2,
        }
    }

    /// Pick the role a session acts under from everything assigned to a user.
    ///
    /// Officers outrank agency staff, who outrank citizens.
    pub fn primary(roles: &[UserRole]) -> Option<UserRole> {
        roles.iter().copied().min_by_key(|r| r.precedence())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_GOVERNMENT_OFFICER => Ok(UserRole::GovernmentOfficer),
            ROLE_AGENCY => Ok(UserRole::Agency),
            ROLE_CITIZEN => Ok(UserRole::Citizen),
            other => Err(CoreError::Validation(format!("Unknown role '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard tabs
// ---------------------------------------------------------------------------

/// A tab on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DashboardTab {
    Overview,
    /// Officer-only project and verification management.
    Management,
    /// Agency staff: projects owned by their agency.
    MyProjects,
    /// Citizens: proofs they uploaded.
    Contributions,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Management => "Management",
            DashboardTab::MyProjects => "My Projects",
            DashboardTab::Contributions => "My Contributions",
        }
    }

    /// The tabs shown for a role, in display order.
    pub fn for_role(role: Option<UserRole>) -> Vec<DashboardTab> {
        let role_tab = match role {
            Some(UserRole::GovernmentOfficer) => Some(DashboardTab::Management),
            Some(UserRole::Agency) => Some(DashboardTab::MyProjects),
            Some(UserRole::Citizen) => Some(DashboardTab::Contributions),
            None => None,
        };
        std::iter::once(DashboardTab::Overview)
            .chain(role_tab)
            .collect()
    }

    /// Whether `role` may open this tab, including by direct navigation.
    pub fn is_visible_to(self, role: Option<UserRole>) -> bool {
        match self {
            DashboardTab::Overview => true,
            DashboardTab::Management => role == Some(UserRole::GovernmentOfficer),
            DashboardTab::MyProjects => role == Some(UserRole::Agency),
            DashboardTab::Contributions => role == Some(UserRole::Citizen),
        }
    }

    /// Parse a `?tab=` value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "overview" => Some(DashboardTab::Overview),
            "management" => Some(DashboardTab::Management),
            "my_projects" | "projects" => Some(DashboardTab::MyProjects),
            "contributions" => Some(DashboardTab::Contributions),
            _ => None,
        }
    }
}
