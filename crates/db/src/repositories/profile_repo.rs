//! Repository for the `profiles` table.

use projectwatch_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, full_name, avatar_url, agency_id, created_at, updated_at";

/// Provides profile creation and lookup.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateProfile) -> Result<Profile, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO profiles (user_id, full_name, avatar_url, agency_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .bind(input.agency_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
