//! Role assignment rows from the `user_roles` table.

use projectwatch_core::error::CoreError;
use projectwatch_core::roles::UserRole;
use projectwatch_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRoleAssignment {
    pub id: DbId,
    pub user_id: DbId,
    /// One of `government_officer`, `agency`, `citizen`.
    pub role: String,
}

impl UserRoleAssignment {
    pub fn role(&self) -> Result<UserRole, CoreError> {
        self.role.parse()
    }
}
