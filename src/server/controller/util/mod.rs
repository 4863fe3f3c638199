//! Utility functions for controller request handling.
//!
//! Resolves the logged in user from the session for protected endpoints and middleware.

pub mod get_user;
