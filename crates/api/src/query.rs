//! Query parameter types shared by the page handlers.
//!
//! Values arrive as raw strings and are parsed in the handlers so an
//! unrecognised value yields a descriptive 400 instead of a generic
//! deserialization rejection.

use serde::Deserialize;

/// `GET /pages/projects?search=&status=&sort=`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsPageParams {
    pub search: Option<String>,
    /// `all`, `active`, `ongoing`, `pending`, `completed`, or `delayed`.
    pub status: Option<String>,
    /// `newest`, `oldest`, `title`, `budget`, `completion`, or `esg`.
    pub sort: Option<String>,
}

/// `GET /pages/dashboard?tab=`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub tab: Option<String>,
}

/// `GET /navigation?path=&menu=`
#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    /// The client's current path; defaults to `/`.
    pub path: Option<String>,
    /// Current mobile menu state, `open` or `closed`.
    pub menu: Option<String>,
    /// Event to apply to the menu state: `toggle` or `select_item`.
    pub event: Option<String>,
}
