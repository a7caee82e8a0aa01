pub mod agencies;
pub mod alerts;
pub mod auth;
pub mod funds;
pub mod health;
pub mod milestones;
pub mod navigation;
pub mod pages;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/sign-in                          sign in (public)
/// /auth/sign-up                          create citizen account (public)
/// /auth/sign-out                         sign out (session)
/// /auth/session                          current session (optional)
/// /auth/session/events                   session changes as SSE (session)
///
/// /pages/landing                         hero, stats, navbar
/// /pages/projects                        project list page (?search=&status=&sort=)
/// /pages/project/{id}                    project detail page
/// /pages/dashboard                       dashboard page (?tab=, session)
///
/// /navigation                            navbar (?path=&menu=&event=)
///
/// /projects                              create (officer)
/// /agencies                              list with project counts
/// /milestones/{id}/verification          verify or reject (officer)
/// /milestones/{id}/proofs                upload proof (session)
/// /funds/ledger                          ledger with totals (officer)
/// /alerts/{id}/read                      mark read (session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/pages", pages::router())
        .merge(navigation::router())
        .nest("/projects", projects::router())
        .nest("/agencies", agencies::router())
        .nest("/milestones", milestones::router())
        .nest("/funds", funds::router())
        .nest("/alerts", alerts::router())
}
