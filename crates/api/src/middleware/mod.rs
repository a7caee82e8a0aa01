//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- A live session, from a JWT Bearer token. 401 otherwise.
//! - [`auth::MaybeAuthUser`] -- The session if there is one; never rejects.
//! - [`rbac::RequireOfficer`] -- Requires the `government_officer` role.
//! - [`rbac::RequireAuth`] -- Requires any signed-in user.

pub mod auth;
pub mod rbac;
