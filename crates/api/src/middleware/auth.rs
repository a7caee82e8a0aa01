//! Session-backed authentication extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use projectwatch_core::error::CoreError;
use projectwatch_core::roles::UserRole;
use projectwatch_core::session::Session;
use projectwatch_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Query parameter accepted in place of the `Authorization` header, for
/// clients such as `EventSource` that cannot set headers.
const TOKEN_QUERY_PARAM: &str = "access_token";

/// A signed-in user whose session is still active.
///
/// The token must be valid *and* its `sid` must still be registered in the
/// session context; a signed-out token is rejected like a missing one.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: Option<UserRole>,
    pub session: Session,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Sign in required".into()))
        })?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let session = state.sessions.current(claims.sid).await.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Session has ended".into()))
        })?;

        Ok(AuthUser {
            user_id: session.user_id,
            role: session.role,
            session,
        })
    }
}

/// The caller's session on pages that render with or without one.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref().map(|user| &user.session)
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

/// The bearer token from the `Authorization` header, falling back to the
/// `access_token` query parameter.
fn bearer_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    {
        return header.strip_prefix("Bearer ").map(str::to_string);
    }

    parts.uri.query().and_then(|query| {
        query.split('&').find_map(|pair| {
            pair.strip_prefix(TOKEN_QUERY_PARAM)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|token| !token.is_empty())
                .map(str::to_string)
        })
    })
}
