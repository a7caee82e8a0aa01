//! Handlers for the `/auth` resource: the only writers of the session context.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::Stream;
use projectwatch_core::error::CoreError;
use projectwatch_core::roles::UserRole;
use projectwatch_core::session::{Session, SessionChange};
use projectwatch_core::types::DbId;
use projectwatch_db::models::profile::CreateProfile;
use projectwatch_db::models::user::{CreateUser, User};
use projectwatch_db::repositories::{ProfileRepo, UserRepo, UserRoleRepo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/sign-in`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/sign-up`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
}

/// Returned by sign-in and sign-up.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub session: Session,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(input): Json<SignInRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let response = open_session(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/sign-up
///
/// Creates a citizen account and signs it in.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(input): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_input(&input)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // User, role and profile commit together; a failure leaves no account behind.
    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            email: input.email.trim().to_string(),
            password_hash,
        },
    )
    .await?;
    UserRoleRepo::assign(&mut *tx, user.id, UserRole::Citizen).await?;
    ProfileRepo::create(
        &mut *tx,
        &CreateProfile {
            user_id: user.id,
            full_name: input.full_name.filter(|n| !n.trim().is_empty()),
            avatar_url: None,
            agency_id: None,
        },
    )
    .await?;
    tx.commit().await?;
    tracing::info!(user_id = %user.id, "Citizen account created");

    let response = open_session(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/sign-out
pub async fn sign_out(State(state): State<AppState>, user: AuthUser) -> StatusCode {
    state.sessions.sign_out(user.session.session_id).await;
    tracing::info!(user_id = %user.user_id, "Signed out");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/session
///
/// The caller's session, or `null` when signed out.
pub async fn session(user: MaybeAuthUser) -> Json<DataResponse<Option<Session>>> {
    Json(DataResponse {
        data: user.session().cloned(),
    })
}

/// GET /api/v1/auth/session/events
///
/// Server-Sent Events for the caller's own session changes. The stream ends
/// after the caller's session is signed out.
pub async fn session_events(
    State(state): State<AppState>,
    user: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let subscription = state.sessions.subscribe();
    let user_id = user.user_id;
    let own_session = user.session.session_id;
    tracing::debug!(%user_id, "Session event stream opened");

    let stream = futures::stream::unfold(Some(subscription), move |subscription| async move {
        let mut subscription = subscription?;
        loop {
            let change = subscription.next().await?;
            if change.user_id() != user_id {
                continue;
            }
            let ended = matches!(
                &change,
                SessionChange::SignedOut { session_id, .. } if *session_id == own_session
            );
            let event = Event::default()
                .event(event_name(&change))
                .json_data(&change);
            return Some((event, (!ended).then_some(subscription)));
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn event_name(change: &SessionChange) -> &'static str {
    match change {
        SessionChange::SignedIn { .. } => "signed_in",
        SessionChange::SignedOut { .. } => "signed_out",
    }
}

/// Resolve the user's primary role, register a session, and mint its token.
async fn open_session(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let role = primary_role(state, user.id).await?;

    let signed_in_at = chrono::Utc::now();
    let session = Session {
        session_id: Uuid::new_v4(),
        user_id: user.id,
        email: user.email.clone(),
        role,
        signed_in_at,
        expires_at: signed_in_at
            + chrono::Duration::minutes(state.config.jwt.access_token_expiry_mins),
    };

    let access_token =
        generate_access_token(user.id, role, session.session_id, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    state.sessions.sign_in(session.clone()).await;
    tracing::info!(user_id = %user.id, role = ?role, "Signed in");

    Ok(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        session,
    })
}

/// Unknown role values in storage are skipped with a warning.
async fn primary_role(state: &AppState, user_id: DbId) -> AppResult<Option<UserRole>> {
    let assignments = UserRoleRepo::list_for_user(&state.pool, user_id).await?;
    let roles: Vec<UserRole> = assignments
        .iter()
        .filter_map(|a| match a.role() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "Skipping unrecognised role");
                None
            }
        })
        .collect();
    Ok(UserRole::primary(&roles))
}

