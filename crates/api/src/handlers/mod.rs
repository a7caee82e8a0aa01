//! HTTP handlers, one module per resource.

pub mod agencies;
pub mod alerts;
pub mod auth;
pub mod funds;
pub mod milestones;
pub mod navigation;
pub mod pages;
pub mod projects;
