//! Session data models.
//!
//! Typed wrappers for the entries kept in a visitor's session, plus the cookie settings and
//! signing keys of the session cookie itself.

pub mod keys;
pub mod user;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "pcs_session";
