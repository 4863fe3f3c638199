//! Data transfer objects shared by the browser bundle and the server.

pub mod api;
pub mod auth;
pub mod location;
pub mod task;
pub mod user;
