//! View models rendered verbatim by the browser client.
//!
//! Each view is built from already-fetched records by a pure function; none
//! of them perform I/O.

pub mod dashboard;
pub mod hero;
pub mod ledger;
pub mod project_card;
pub mod project_detail;

pub use project_card::{ProjectCard, StatusBadge};
