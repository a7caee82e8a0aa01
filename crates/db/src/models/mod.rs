//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Join rows that carry a parent's display name, convertible into the
//!   core records the views consume
//! - `Deserialize` + `Validate` create DTOs for inserts

use validator::ValidationError;

pub mod agency;
pub mod alert;
pub mod funds_ledger;
pub mod milestone;
pub mod profile;
pub mod project;
pub mod proof;
pub mod user;
pub mod user_role;

/// Reject empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
