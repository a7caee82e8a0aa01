//! Repository for the `user_roles` table.

use projectwatch_core::roles::UserRole;
use projectwatch_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_role::UserRoleAssignment;

/// Provides role assignment and lookup.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Grant `role` to a user. Granting a role the user already holds is a no-op.
    pub async fn assign<'e, E>(executor: E, user_id: DbId, role: UserRole) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_user_roles_user_role DO NOTHING",
        )
        .bind(user_id)
        .bind(role.as_str())
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Every role row for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserRoleAssignment>, sqlx::Error> {
        sqlx::query_as::<_, UserRoleAssignment>(
            "SELECT id, user_id, role FROM user_roles WHERE user_id = $1 ORDER BY role ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
