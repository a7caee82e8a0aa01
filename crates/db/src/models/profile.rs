//! Profile model and DTOs.

use projectwatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A profile row from the `profiles` table. One per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Set for agency staff; scopes the dashboard's projects panel.
    pub agency_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfile {
    pub user_id: DbId,
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub agency_id: Option<DbId>,
}
