//! HTTP controller endpoints for the portfolio API.
//!
//! Axum handlers for account flows, the task list and admin endpoints. Controllers read the
//! session through tower-sessions, delegate to the service layer and are documented for the
//! OpenAPI document with utoipa.

pub mod admin;
pub mod auth;
pub mod task;
pub mod util;
