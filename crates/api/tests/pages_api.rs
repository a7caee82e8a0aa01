//! HTTP-level tests for the page view models: landing, projects, project
//! detail, dashboard, and navigation.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, get, get_auth};
use projectwatch_core::roles::UserRole;
use projectwatch_core::status::{AlertSeverity, FundStatus, MilestoneStatus, ProjectStatus};
use projectwatch_core::types::DbId;
use projectwatch_db::models::agency::CreateAgency;
use projectwatch_db::models::alert::CreateAlert;
use projectwatch_db::models::funds_ledger::CreateFundsLedgerEntry;
use projectwatch_db::models::milestone::CreateMilestone;
use projectwatch_db::models::profile::CreateProfile;
use projectwatch_db::models::project::CreateProject;
use projectwatch_db::models::proof::CreateProof;
use projectwatch_db::repositories::{
    AgencyRepo, AlertRepo, FundsLedgerRepo, MilestoneRepo, ProfileRepo, ProjectRepo, ProofRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Ids of the seeded records.
struct Seeded {
    agency_id: DbId,
    metro_id: DbId,
    orphan_id: DbId,
    phase_one_id: DbId,
}

fn project(title: &str, agency_id: Option<DbId>, status: ProjectStatus) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: Some(format!("{title} description")),
        status: Some(status),
        budget: Some(10_000),
        location: Some("Pune".to_string()),
        agency_id,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
        esg_score: Some(80),
        completion_percentage: Some(40),
    }
}

fn entry(project_id: DbId, amount: i64, status: FundStatus) -> CreateFundsLedgerEntry {
    CreateFundsLedgerEntry {
        project_id,
        milestone_id: None,
        amount,
        status: Some(status),
        tx_id: None,
        description: None,
    }
}

/// One agency; two active projects (one under the agency) and one pending
/// project without an agency; ledger `[1000, 2500, 0]`; two milestones on
/// the metro project, one verified; two alerts, one unread.
async fn seed(pool: &PgPool) -> Seeded {
    let agency = AgencyRepo::create(
        pool,
        &CreateAgency {
            name: "Department of Urban Development".to_string(),
            reputation_score: Some(88),
        },
    )
    .await
    .unwrap();

    let metro = ProjectRepo::create(pool, &project("Metro Line 3", Some(agency.id), ProjectStatus::Ongoing))
        .await
        .unwrap();
    ProjectRepo::create(pool, &project("Solar Canal Cover", None, ProjectStatus::Ongoing))
        .await
        .unwrap();
    let orphan = ProjectRepo::create(pool, &project("Riverfront Cleanup", None, ProjectStatus::Pending))
        .await
        .unwrap();

    for (amount, status) in [
        (1000, FundStatus::Allocated),
        (2500, FundStatus::Utilized),
        (0, FundStatus::Released),
    ] {
        FundsLedgerRepo::create(pool, &entry(metro.id, amount, status))
            .await
            .unwrap();
    }

    let phase_one = MilestoneRepo::create(
        pool,
        &CreateMilestone {
            project_id: metro.id,
            title: "Phase 1".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        },
    )
    .await
    .unwrap();
    let planning = MilestoneRepo::create(
        pool,
        &CreateMilestone {
            project_id: metro.id,
            title: "Planning".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        },
    )
    .await
    .unwrap();
    MilestoneRepo::transition_status(
        pool,
        planning.id,
        MilestoneStatus::Pending,
        MilestoneStatus::Verified,
    )
    .await
    .unwrap();

    AlertRepo::create(
        pool,
        &CreateAlert {
            project_id: Some(metro.id),
            message: "Budget overrun detected".to_string(),
            severity: Some(AlertSeverity::High),
        },
    )
    .await
    .unwrap();
    let read = AlertRepo::create(
        pool,
        &CreateAlert {
            project_id: None,
            message: "Quarterly audit scheduled".to_string(),
            severity: None,
        },
    )
    .await
    .unwrap();
    AlertRepo::mark_read(pool, read.id).await.unwrap();

    Seeded {
        agency_id: agency.id,
        metro_id: metro.id,
        orphan_id: orphan.id,
        phase_one_id: phase_one.id,
    }
}

fn stat<'a>(page: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    page["stats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|card| card["key"] == key)
        .map(|card| &card["value"])
}

// ---------------------------------------------------------------------------
// Landing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_landing_fills_hero_from_live_counts(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/pages/landing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    let values: Vec<&str> = page["hero"]["stats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tile| tile["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["2", "₹3.5K", "1", "50%"]);
    assert_eq!(page["stats_degraded"], false);
    assert_eq!(page["navbar"]["auth"]["kind"], "signed_out");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_landing_on_empty_database(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/pages/landing").await).await;
    let page = &json["data"];
    assert_eq!(page["hero"]["stats"][1]["value"], "₹0");
    assert_eq!(page["hero"]["stats"][3]["value"], "0%");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_projects_status_filter(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/pages/projects?status=active&sort=title").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    let titles: Vec<&str> = page["projects"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Metro Line 3", "Solar Canal Cover"]);
    assert_eq!(page["result_label"], "Showing 2 of 3 projects");
    assert_eq!(page["status"], "active");
    assert_eq!(page["projects"]["loaded"], true);
    assert_eq!(page["projects"]["degraded"], false);

    let counts: Vec<(String, u64)> = page["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tab| (tab["value"].as_str().unwrap().to_string(), tab["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(counts[0], ("all".to_string(), 3));
    assert_eq!(counts[1], ("active".to_string(), 2));
    assert_eq!(counts[2], ("pending".to_string(), 1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_projects_search_matches_agency_placeholder(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/pages/projects?search=%20unknown%20agency").await).await;
    let page = &json["data"];
    let cards = page["projects"]["data"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c["agency"] == "Unknown Agency"));

    let json = body_json(get(app, "/api/v1/pages/projects?search=METRO").await).await;
    let page = &json["data"];
    let cards = page["projects"]["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["badge"]["label"], "Active");
    assert_eq!(cards[0]["budget"], "₹10K");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_projects_rejects_unknown_filters(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/pages/projects?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/pages/projects?sort=random").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_detail_sections(pool: PgPool) {
    let seeded = seed(&pool).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/pages/project/{}", seeded.metro_id);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    assert_eq!(page["header"]["title"], "Metro Line 3");
    assert_eq!(page["header"]["start_date_full"], "January 15, 2024");
    assert_eq!(page["budget_utilization"], 25);

    let milestones = &page["milestones"]["data"];
    assert_eq!(milestones["items"][0]["title"], "Planning");
    assert_eq!(milestones["items"][1]["id"], seeded.phase_one_id.to_string());
    assert_eq!(milestones["verified_percentage"], 50);

    let funding = &page["funding"]["data"];
    assert_eq!(funding["total"], 3500);
    assert_eq!(funding["total_display"], "₹3.5K");

    let alerts = page["alerts"]["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["severity"], "high");
    assert_eq!(alerts[0]["project_title"], "Metro Line 3");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_detail_without_agency_or_activity(pool: PgPool) {
    let seeded = seed(&pool).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, &format!("/api/v1/pages/project/{}", seeded.orphan_id)).await).await;
    let page = &json["data"];
    assert_eq!(page["header"]["agency"], "Unknown Agency");
    assert!(page["milestones"]["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(page["funding"]["data"]["total"], 0);
    assert_eq!(page["budget_utilization"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_detail_missing_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pages/project/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_without_session_redirects_to_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/pages/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["redirect"], "/auth");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_officer_dashboard(pool: PgPool) {
    seed(&pool).await;
    common::create_user(&pool, "officer@gov.example", Some(UserRole::GovernmentOfficer)).await;
    let app = common::build_test_app(pool);
    let token = common::sign_in(app.clone(), "officer@gov.example").await;

    let json = body_json(get_auth(app.clone(), "/api/v1/pages/dashboard", &token).await).await;
    let page = &json["data"];
    assert_eq!(page["role_badge"]["label"], "GOVERNMENT OFFICER");
    assert_eq!(stat(page, "total_projects").unwrap(), "3");
    assert_eq!(stat(page, "total_funds").unwrap(), "₹3.5K");
    assert_eq!(stat(page, "pending_verifications").unwrap(), "1");
    assert_eq!(stat(page, "alerts").unwrap(), "1");
    assert!(stat(page, "my_proofs").is_none());
    assert_eq!(page["stats_degraded"], false);

    assert_eq!(page["panel"]["kind"], "overview");
    assert_eq!(page["panel"]["recent_projects"]["data"].as_array().unwrap().len(), 3);
    let alerts = page["panel"]["recent_alerts"]["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().any(|a| a["project_title"] == "Unknown Project"));

    let tabs: Vec<&str> = page["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tab"].as_str().unwrap())
        .collect();
    assert_eq!(tabs, vec!["overview", "management"]);

    let json = body_json(
        get_auth(app, "/api/v1/pages/dashboard?tab=management", &token).await,
    )
    .await;
    let page = &json["data"];
    assert_eq!(page["panel"]["kind"], "management");
    assert_eq!(page["panel"]["actions"][0]["href"], "/projects/create");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_citizen_never_sees_management(pool: PgPool) {
    let seeded = seed(&pool).await;
    let citizen = common::create_user(&pool, "citizen@example.com", Some(UserRole::Citizen)).await;
    ProofRepo::create(
        &pool,
        &CreateProof {
            milestone_id: seeded.phase_one_id,
            uploader: citizen.id,
            file_url: None,
            comment: Some("Site visit photos".to_string()),
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);
    let token = common::sign_in(app.clone(), "citizen@example.com").await;

    let response = get_auth(app.clone(), "/api/v1/pages/dashboard?tab=management", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(get_auth(app.clone(), "/api/v1/pages/dashboard", &token).await).await;
    let page = &json["data"];
    assert_eq!(stat(page, "my_proofs").unwrap(), "1");
    assert!(stat(page, "pending_verifications").is_none());
    assert!(page["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["tab"] != "management"));

    let json = body_json(
        get_auth(app, "/api/v1/pages/dashboard?tab=contributions", &token).await,
    )
    .await;
    let page = &json["data"];
    let proofs = page["panel"]["proofs"]["data"].as_array().unwrap();
    assert_eq!(proofs.len(), 1);
    assert_eq!(proofs[0]["milestone_title"], "Phase 1");
    assert_eq!(proofs[0]["project_href"], format!("/project/{}", seeded.metro_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_agency_dashboard_lists_own_projects(pool: PgPool) {
    let seeded = seed(&pool).await;
    let staff = common::create_user(&pool, "staff@agency.example", Some(UserRole::Agency)).await;
    ProfileRepo::create(
        &pool,
        &CreateProfile {
            user_id: staff.id,
            full_name: Some("Agency Staff".to_string()),
            avatar_url: None,
            agency_id: Some(seeded.agency_id),
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);
    let token = common::sign_in(app.clone(), "staff@agency.example").await;

    let json = body_json(
        get_auth(app, "/api/v1/pages/dashboard?tab=my_projects", &token).await,
    )
    .await;
    let page = &json["data"];
    assert_eq!(page["panel"]["kind"], "my_projects");
    assert_eq!(page["panel"]["agency_linked"], true);
    let projects = page["panel"]["projects"]["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Metro Line 3");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_roleless_user_sees_overview_only(pool: PgPool) {
    common::create_user(&pool, "new@example.com", None).await;
    let app = common::build_test_app(pool);
    let token = common::sign_in(app.clone(), "new@example.com").await;

    let json = body_json(get_auth(app.clone(), "/api/v1/pages/dashboard", &token).await).await;
    let page = &json["data"];
    assert_eq!(page["role_badge"]["label"], "CITIZEN");
    assert_eq!(page["tabs"].as_array().unwrap().len(), 1);

    let response = get_auth(app.clone(), "/api/v1/pages/dashboard?tab=contributions", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/v1/pages/dashboard?tab=settings", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Degraded sections
// ---------------------------------------------------------------------------

/// Make every query against `table` fail.
async fn break_table(pool: &PgPool, table: &str) {
    sqlx::query(&format!("ALTER TABLE {table} RENAME TO {table}_gone"))
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_landing_renders_when_a_stat_query_fails(pool: PgPool) {
    seed(&pool).await;
    break_table(&pool, "funds_ledger").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/pages/landing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    assert_eq!(page["stats_degraded"], true);
    let values: Vec<&str> = page["hero"]["stats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tile| tile["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["2", "₹0", "1", "50%"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_renders_when_alerts_query_fails(pool: PgPool) {
    seed(&pool).await;
    common::create_user(&pool, "officer@gov.example", Some(UserRole::GovernmentOfficer)).await;
    let app = common::build_test_app(pool.clone());
    let token = common::sign_in(app.clone(), "officer@gov.example").await;
    break_table(&pool, "alerts").await;

    let response = get_auth(app, "/api/v1/pages/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    assert_eq!(page["stats_degraded"], true);
    assert_eq!(stat(page, "alerts").unwrap(), "0");
    assert_eq!(stat(page, "total_projects").unwrap(), "3");
    assert_eq!(stat(page, "total_funds").unwrap(), "₹3.5K");
    assert_eq!(stat(page, "pending_verifications").unwrap(), "1");

    let alerts = &page["panel"]["recent_alerts"];
    assert_eq!(alerts["degraded"], true);
    assert_eq!(alerts["loaded"], true);
    assert!(alerts["data"].as_array().unwrap().is_empty());

    let projects = &page["panel"]["recent_projects"];
    assert_eq!(projects["degraded"], false);
    assert_eq!(projects["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_detail_renders_when_alerts_query_fails(pool: PgPool) {
    let seeded = seed(&pool).await;
    break_table(&pool, "alerts").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/pages/project/{}", seeded.metro_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page = &json["data"];

    assert_eq!(page["alerts"]["degraded"], true);
    assert!(page["alerts"]["data"].as_array().unwrap().is_empty());
    assert_eq!(page["milestones"]["degraded"], false);
    assert_eq!(page["funding"]["degraded"], false);
    assert_eq!(page["header"]["title"], "Metro Line 3");
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_navigation_menu_and_session(pool: PgPool) {
    common::create_user(&pool, "officer@gov.example", Some(UserRole::GovernmentOfficer)).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/navigation?path=/map&event=toggle").await).await;
    let bar = &json["data"];
    assert_eq!(bar["mobile_menu"], "open");
    assert!(bar["items"].as_array().unwrap().iter().all(|i| i["name"] != "Dashboard"));

    let json = body_json(
        get(app.clone(), "/api/v1/navigation?path=/map&menu=open&event=select_item").await,
    )
    .await;
    let bar = &json["data"];
    assert_eq!(bar["mobile_menu"], "closed");

    let token = common::sign_in(app.clone(), "officer@gov.example").await;
    let json = body_json(get_auth(app.clone(), "/api/v1/navigation?path=/dashboard", &token).await).await;
    let bar = &json["data"];
    assert_eq!(bar["auth"]["kind"], "signed_in");
    assert_eq!(bar["auth"]["role_label"], "GOVERNMENT OFFICER");
    assert!(bar["items"]
        .as_array()
        .unwrap()
        .iter()
        .any(|i| i["name"] == "Dashboard" && i["active"] == true));

    let response = get(app, "/api/v1/navigation?menu=half-open").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
