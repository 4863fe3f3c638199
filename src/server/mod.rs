//! Server application core modules.
//!
//! Everything behind the `server` feature: configuration, the REST API with its controllers,
//! services and repositories, the session cookie handling and the middleware guarding
//! authenticated and admin routes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
