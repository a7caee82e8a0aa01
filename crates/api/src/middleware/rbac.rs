//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`], so a missing session is a 401 and a
//! role mismatch is a 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use projectwatch_core::error::CoreError;
use projectwatch_core::roles::UserRole;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `government_officer` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn officer_only(RequireOfficer(user): RequireOfficer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOfficer(pub AuthUser);

impl FromRequestParts<AppState> for RequireOfficer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Some(UserRole::GovernmentOfficer) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Government officer role required".into(),
            )));
        }
        Ok(RequireOfficer(user))
    }
}

/// Requires any signed-in user (any role, or none).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for routes
/// where "this requires a session" should read at the signature.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
