//! Health endpoint and cross-cutting middleware behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use projectwatch_core::roles::UserRole;
use projectwatch_core::session::{Session, SessionContext};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["active_sessions"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_id_is_propagated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_sessions_are_not_counted(pool: PgPool) {
    common::create_user(&pool, "live@example.com", Some(UserRole::Citizen)).await;
    let sessions = Arc::new(SessionContext::new());
    let app = common::build_test_app_with_sessions(pool, Arc::clone(&sessions));

    let signed_in_at = chrono::Utc::now() - chrono::Duration::days(2);
    for _ in 0..10 {
        sessions
            .sign_in(Session {
                session_id: uuid::Uuid::new_v4(),
                user_id: uuid::Uuid::new_v4(),
                email: "stale@example.com".to_string(),
                role: None,
                signed_in_at,
                expires_at: signed_in_at + chrono::Duration::hours(1),
            })
            .await;
    }
    common::sign_in(app.clone(), "live@example.com").await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["active_sessions"], 1);
}
