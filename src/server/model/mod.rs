//! Server application models.
//!
//! Application state shared by handlers, database model aliases and the typed session entries.

pub mod app;
pub mod db;
pub mod session;
