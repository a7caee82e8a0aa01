//! Navigation surface: routes, the navigation bar, and its mobile menu.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::roles::UserRole;
use crate::session::Session;
use crate::types::DbId;

/// Brand name shown in the navigation bar.
pub const BRAND_NAME: &str = "ProjectWatch";

/// Every page the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(DbId),
    Dashboard,
    Map,
    Analytics,
    Auth,
}

impl Route {
    /// Parse a client path. Trailing slashes and query strings are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/projects" => Some(Route::Projects),
            "/dashboard" => Some(Route::Dashboard),
            "/map" => Some(Route::Map),
            "/analytics" => Some(Route::Analytics),
            "/auth" => Some(Route::Auth),
            other => other
                .strip_prefix("/project/")
                .and_then(|id| id.parse().ok())
                .map(Route::ProjectDetail),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/project/{id}"),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Map => "/map".to_string(),
            Route::Analytics => "/analytics".to_string(),
            Route::Auth => "/auth".to_string(),
        }
    }

    /// Routes that redirect to [`Route::Auth`] without a session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

// ---------------------------------------------------------------------------
// Mobile menu state machine
// ---------------------------------------------------------------------------

/// Collapsible menu shown on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

/// User interaction with the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEvent {
    /// The hamburger / close button.
    Toggle,
    /// Any navigation link inside the menu.
    SelectItem,
}

impl MobileMenu {
    pub fn apply(self, event: MenuEvent) -> MobileMenu {
        match (self, event) {
            (MobileMenu::Closed, MenuEvent::Toggle) => MobileMenu::Open,
            (MobileMenu::Open, MenuEvent::Toggle) => MobileMenu::Closed,
            (_, MenuEvent::SelectItem) => MobileMenu::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }
}

// ---------------------------------------------------------------------------
// Navigation bar view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NavItem {
    pub name: String,
    pub href: String,
    /// Whether the current path is exactly this item's path.
    pub active: bool,
}

/// Buttons on the right-hand side of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AuthActions {
    SignedOut {
        sign_in_href: String,
        get_started_href: String,
    },
    SignedIn {
        email: String,
        role: Option<UserRole>,
        role_label: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NavBar {
    pub brand: String,
    pub brand_href: String,
    pub items: Vec<NavItem>,
    pub auth: AuthActions,
    pub mobile_menu: MobileMenu,
}

impl NavBar {
    /// Build the bar for `current_path` and an optional session.
    ///
    /// The Dashboard link only appears for signed-in users.
    pub fn build(current_path: &str, session: Option<&Session>, mobile_menu: MobileMenu) -> NavBar {
        let current = Route::parse(current_path);
        let mut routes = vec![
            ("Projects", Route::Projects),
            ("Map", Route::Map),
            ("Analytics", Route::Analytics),
        ];
        if session.is_some() {
            routes.push(("Dashboard", Route::Dashboard));
        }

        let items = routes
            .into_iter()
            .map(|(name, route)| NavItem {
                name: name.to_string(),
                href: route.path(),
                active: current == Some(route),
            })
            .collect();

        let auth = match session {
            Some(s) => AuthActions::SignedIn {
                email: s.email.clone(),
                role: s.role,
                role_label: s.role.map(UserRole::badge_label),
            },
            None => AuthActions::SignedOut {
                sign_in_href: Route::Auth.path(),
                get_started_href: Route::Auth.path(),
            },
        };

        NavBar {
            brand: BRAND_NAME.to_string(),
            brand_href: Route::Home.path(),
            items,
            auth,
            mobile_menu,
        }
    }
}
