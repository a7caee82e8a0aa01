//! Domain logic for the ProjectWatch transparency dashboard.
//!
//! Everything in this crate is free of I/O: record shapes and status enums,
//! the role model, the session context, filtering/sorting/aggregation over
//! project listings, display formatting, and the view models the browser
//! client renders verbatim.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod navigation;
pub mod project;
pub mod roles;
pub mod session;
pub mod status;
pub mod types;
pub mod views;
