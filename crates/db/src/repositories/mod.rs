//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod agency_repo;
pub mod alert_repo;
pub mod funds_ledger_repo;
pub mod milestone_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod proof_repo;
pub mod user_repo;
pub mod user_role_repo;

pub use agency_repo::AgencyRepo;
pub use alert_repo::AlertRepo;
pub use funds_ledger_repo::FundsLedgerRepo;
pub use milestone_repo::MilestoneRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use proof_repo::ProofRepo;
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
