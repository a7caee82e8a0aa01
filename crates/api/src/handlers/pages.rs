//! Page view models: every read query a page needs, aggregated and formatted.
//!
//! Independent queries for a page run concurrently. Each section goes
//! through [`degrade`], so a failed query empties its section instead of
//! failing the page. Only the subject of a page (the project on the detail
//! page) is fetched strictly.

use axum::extract::{Path, Query, State};
use axum::Json;
use projectwatch_core::aggregate::{percentage_of, sum_amounts, FundingBreakdown};
use projectwatch_core::error::CoreError;
use projectwatch_core::filter::{
    showing_label, status_tabs, ProjectQuery, ProjectSort, StatusFilter, StatusTab,
};
use projectwatch_core::formatting::CurrencyLocale;
use projectwatch_core::navigation::{MobileMenu, NavBar, Route};
use projectwatch_core::project::ProjectSummary;
use projectwatch_core::roles::{DashboardTab, UserRole};
use projectwatch_core::status::{FundStatus, MilestoneStatus, ProjectStatus};
use projectwatch_core::types::DbId;
use projectwatch_core::views::dashboard::{
    management_actions, tab_views, AlertItem, AlertRecord, ContributionItem, ContributionRecord,
    DashboardStats, ManagementAction, RoleBadge, StatCard, TabView,
};
use projectwatch_core::views::hero::{HeroSection, LandingStats};
use projectwatch_core::views::project_detail::{
    budget_utilization, MilestoneRecord, MilestoneTimeline, ProjectHeader,
};
use projectwatch_core::views::ProjectCard;
use projectwatch_db::repositories::{
    AgencyRepo, AlertRepo, FundsLedgerRepo, MilestoneRepo, ProfileRepo, ProjectRepo, ProofRepo,
};
use projectwatch_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::{DashboardParams, ProjectsPageParams};
use crate::response::DataResponse;
use crate::section::{convert_rows, degrade, Section};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Page view models
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LandingPage {
    pub navbar: NavBar,
    pub hero: HeroSection,
    /// At least one landing stat could not be loaded and shows zero.
    pub stats_degraded: bool,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub navbar: NavBar,
    pub search: String,
    pub status: String,
    pub sort: ProjectSort,
    pub tabs: Vec<StatusTab>,
    pub projects: Section<Vec<ProjectCard>>,
    /// `Showing N of M projects`.
    pub result_label: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailPage {
    pub navbar: NavBar,
    pub header: ProjectHeader,
    /// Utilized funds as a percentage of the budget.
    pub budget_utilization: u8,
    pub milestones: Section<MilestoneTimeline>,
    pub funding: Section<FundingBreakdown>,
    pub alerts: Section<Vec<AlertItem>>,
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub navbar: NavBar,
    pub role_badge: RoleBadge,
    pub tabs: Vec<TabView>,
    pub selected_tab: DashboardTab,
    pub stats: Vec<StatCard>,
    pub stats_degraded: bool,
    pub panel: DashboardPanel,
}

/// Content of the selected dashboard tab.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardPanel {
    Overview {
        recent_projects: Section<Vec<ProjectCard>>,
        recent_alerts: Section<Vec<AlertItem>>,
    },
    Management {
        actions: Vec<ManagementAction>,
    },
    MyProjects {
        /// False when the caller's profile is not linked to an agency.
        agency_linked: bool,
        projects: Section<Vec<ProjectCard>>,
    },
    Contributions {
        proofs: Section<Vec<ContributionItem>>,
    },
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/landing
pub async fn landing(
    State(state): State<AppState>,
    user: MaybeAuthUser,
) -> Json<DataResponse<LandingPage>> {
    let pool = &state.pool;
    let (active, amounts, agencies, verified, milestones) = tokio::join!(
        ProjectRepo::count_by_status(pool, ProjectStatus::Ongoing),
        FundsLedgerRepo::list_amounts(pool),
        AgencyRepo::count(pool),
        MilestoneRepo::count_by_status(pool, MilestoneStatus::Verified),
        MilestoneRepo::count(pool),
    );

    let active = degrade("active_projects", active);
    let funds = degrade("funds_tracked", amounts).map(sum_amounts);
    let agencies = degrade("agencies", agencies);
    let verified = degrade("verified_milestones", verified);
    let milestones = degrade("milestones", milestones);

    let stats_degraded = active.degraded
        || funds.degraded
        || agencies.degraded
        || verified.degraded
        || milestones.degraded;

    let stats = LandingStats {
        active_projects: active.data,
        funds_tracked: funds.data,
        agencies: agencies.data,
        verification_rate: percentage_of(verified.data, milestones.data),
    };

    Json(DataResponse {
        data: LandingPage {
            navbar: navbar(Route::Home, &user),
            hero: HeroSection::build(stats, state.config.currency_locale),
            stats_degraded,
        },
    })
}

/// GET /api/v1/pages/projects?search=&status=&sort=
///
/// Every project is fetched once; search, status filter, and sort are
/// applied to the fetched set.
pub async fn projects(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    Query(params): Query<ProjectsPageParams>,
) -> AppResult<Json<DataResponse<ProjectsPage>>> {
    let status = match params.status.as_deref() {
        Some(value) => StatusFilter::parse(value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status filter '{value}'")))?,
        None => StatusFilter::default(),
    };
    let sort = match params.sort.as_deref() {
        Some(value) => ProjectSort::parse(value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sort order '{value}'")))?,
        None => ProjectSort::default(),
    };
    let query = ProjectQuery {
        search: params.search.unwrap_or_default(),
        status,
        sort,
    };

    let all = degrade("projects", all_summaries(&state.pool).await);
    let locale = state.config.currency_locale;

    let tabs = status_tabs(&all.data, query.status);
    let total = all.data.len();
    let projects = all.map(|rows| cards(query.apply(&rows), locale));
    let result_label = showing_label(projects.data.len(), total);

    Ok(Json(DataResponse {
        data: ProjectsPage {
            navbar: navbar(Route::Projects, &user),
            search: query.search.trim().to_string(),
            status: query.status.key().to_string(),
            sort: query.sort,
            tabs,
            projects,
            result_label,
        },
    }))
}

/// GET /api/v1/pages/project/{id}
pub async fn project_detail(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetailPage>>> {
    let row = ProjectRepo::find_summary(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let project = ProjectSummary::try_from(row)?;
    let locale = state.config.currency_locale;

    let (milestones, funding, alerts) = tokio::join!(
        project_milestones(&state.pool, id),
        project_funding(&state.pool, id),
        project_alerts(&state.pool, id),
    );

    let milestones = degrade("milestones", milestones).map(MilestoneTimeline::build);
    let funding = degrade("funding", funding)
        .map(|entries| FundingBreakdown::from_entries(entries, locale));
    let alerts = degrade("project_alerts", alerts)
        .map(|records| records.into_iter().map(AlertItem::from).collect());

    let utilized = funding
        .data
        .shares
        .iter()
        .find(|share| share.status == FundStatus::Utilized)
        .map_or(0, |share| share.amount);

    Ok(Json(DataResponse {
        data: ProjectDetailPage {
            navbar: navbar(Route::ProjectDetail(id), &user),
            header: ProjectHeader::build(&project, locale),
            budget_utilization: budget_utilization(utilized, project.budget),
            milestones,
            funding,
            alerts,
        },
    }))
}

/// GET /api/v1/pages/dashboard?tab=
///
/// Requires a session. A tab the caller's role cannot see is a 403, even
/// when requested directly.
pub async fn dashboard(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<DataResponse<DashboardPage>>> {
    let tab = match params.tab.as_deref() {
        Some(value) => DashboardTab::parse(value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown dashboard tab '{value}'")))?,
        None => DashboardTab::Overview,
    };
    if !tab.is_visible_to(user.role) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "The {} tab is not available for this role",
            tab.label()
        ))));
    }

    let ((stats, stats_degraded), panel) = tokio::join!(
        dashboard_stats(&state, &user),
        dashboard_panel(&state, &user, tab),
    );

    Ok(Json(DataResponse {
        data: DashboardPage {
            navbar: NavBar::build(&Route::Dashboard.path(), Some(&user.session), MobileMenu::Closed),
            role_badge: RoleBadge::for_role(user.role),
            tabs: tab_views(user.role, tab),
            selected_tab: tab,
            stats: stats.cards(state.config.currency_locale),
            stats_degraded,
            panel,
        },
    }))
}

// ---------------------------------------------------------------------------
// Section queries
// ---------------------------------------------------------------------------

fn navbar(route: Route, user: &MaybeAuthUser) -> NavBar {
    NavBar::build(&route.path(), user.session(), MobileMenu::Closed)
}

fn cards<'a>(
    projects: impl IntoIterator<Item = &'a ProjectSummary>,
    locale: CurrencyLocale,
) -> Vec<ProjectCard> {
    projects
        .into_iter()
        .map(|p| ProjectCard::from_summary(p, locale))
        .collect()
}

async fn all_summaries(pool: &DbPool) -> AppResult<Vec<ProjectSummary>> {
    let rows = ProjectRepo::list_summaries(pool).await?;
    Ok(convert_rows(rows)?)
}

async fn recent_summaries(pool: &DbPool, limit: i64) -> AppResult<Vec<ProjectSummary>> {
    let rows = ProjectRepo::list_recent(pool, limit).await?;
    Ok(convert_rows(rows)?)
}

async fn recent_alerts(pool: &DbPool, limit: i64) -> AppResult<Vec<AlertRecord>> {
    let rows = AlertRepo::list_recent(pool, limit).await?;
    Ok(convert_rows(rows)?)
}

async fn project_milestones(pool: &DbPool, project_id: DbId) -> AppResult<Vec<MilestoneRecord>> {
    let rows = MilestoneRepo::list_for_project_with_proof_counts(pool, project_id).await?;
    Ok(convert_rows(rows)?)
}

async fn project_funding(
    pool: &DbPool,
    project_id: DbId,
) -> AppResult<Vec<(Option<FundStatus>, i64)>> {
    let totals = FundsLedgerRepo::totals_by_status_for_project(pool, project_id).await?;
    let entries = totals
        .into_iter()
        .map(|total| total.into_entry())
        .collect::<Result<Vec<_>, CoreError>>()?;
    Ok(entries)
}

async fn project_alerts(pool: &DbPool, project_id: DbId) -> AppResult<Vec<AlertRecord>> {
    let rows = AlertRepo::list_for_project(pool, project_id).await?;
    Ok(convert_rows(rows)?)
}

/// Pending milestones awaiting review; officers only.
async fn pending_verifications(
    pool: &DbPool,
    role: Option<UserRole>,
) -> Option<Result<i64, sqlx::Error>> {
    match role {
        Some(UserRole::GovernmentOfficer) => {
            Some(MilestoneRepo::count_by_status(pool, MilestoneStatus::Pending).await)
        }
        Some(UserRole::Agency) | Some(UserRole::Citizen) | None => None,
    }
}

/// Proofs the caller uploaded; citizens only.
async fn own_proof_count(
    pool: &DbPool,
    role: Option<UserRole>,
    user_id: DbId,
) -> Option<Result<i64, sqlx::Error>> {
    match role {
        Some(UserRole::Citizen) => Some(ProofRepo::count_by_uploader(pool, user_id).await),
        Some(UserRole::GovernmentOfficer) | Some(UserRole::Agency) | None => None,
    }
}

/// Stat card counts, plus whether any of them degraded.
async fn dashboard_stats(state: &AppState, user: &AuthUser) -> (DashboardStats, bool) {
    let pool = &state.pool;
    let (total_projects, amounts, unread, pending, proofs) = tokio::join!(
        ProjectRepo::count(pool),
        FundsLedgerRepo::list_amounts(pool),
        AlertRepo::count_unread(pool),
        pending_verifications(pool, user.role),
        own_proof_count(pool, user.role, user.user_id),
    );

    let total_projects = degrade("total_projects", total_projects);
    let total_funds = degrade("total_funds", amounts).map(sum_amounts);
    let unread = degrade("unread_alerts", unread);
    let pending = pending.map(|r| degrade("pending_verifications", r));
    let proofs = proofs.map(|r| degrade("my_proofs", r));

    let degraded = total_projects.degraded
        || total_funds.degraded
        || unread.degraded
        || pending.as_ref().is_some_and(|s| s.degraded)
        || proofs.as_ref().is_some_and(|s| s.degraded);

    let stats = DashboardStats {
        total_projects: total_projects.data,
        total_funds: total_funds.data,
        pending_verifications: pending.map(|s| s.data),
        my_proofs: proofs.map(|s| s.data),
        unread_alerts: unread.data,
    };
    (stats, degraded)
}

async fn dashboard_panel(state: &AppState, user: &AuthUser, tab: DashboardTab) -> DashboardPanel {
    let pool = &state.pool;
    let limit = state.config.recent_items_limit;
    let locale = state.config.currency_locale;

    match tab {
        DashboardTab::Overview => {
            let (projects, alerts) =
                tokio::join!(recent_summaries(pool, limit), recent_alerts(pool, limit));
            DashboardPanel::Overview {
                recent_projects: degrade("recent_projects", projects)
                    .map(|rows| cards(&rows, locale)),
                recent_alerts: degrade("recent_alerts", alerts)
                    .map(|records| records.into_iter().map(AlertItem::from).collect()),
            }
        }
        DashboardTab::Management => DashboardPanel::Management {
            actions: management_actions(),
        },
        DashboardTab::MyProjects => {
            let section = degrade("agency_projects", agency_projects(pool, user.user_id).await);
            let agency_linked = section.data.0;
            DashboardPanel::MyProjects {
                agency_linked,
                projects: section.map(|(_, rows)| cards(&rows, locale)),
            }
        }
        DashboardTab::Contributions => {
            let proofs = degrade(
                "contributions",
                ProofRepo::list_recent_by_uploader(pool, user.user_id, limit).await,
            );
            DashboardPanel::Contributions {
                proofs: proofs.map(|rows| {
                    rows.into_iter()
                        .map(|row| ContributionItem::from(ContributionRecord::from(row)))
                        .collect()
                }),
            }
        }
    }
}

/// Projects run by the agency the caller's profile is linked to.
async fn agency_projects(pool: &DbPool, user_id: DbId) -> AppResult<(bool, Vec<ProjectSummary>)> {
    let Some(agency_id) = ProfileRepo::find_by_user_id(pool, user_id)
        .await?
        .and_then(|profile| profile.agency_id)
    else {
        return Ok((false, Vec::new()));
    };
    let rows = ProjectRepo::list_by_agency(pool, agency_id).await?;
    Ok((true, convert_rows(rows)?))
}
