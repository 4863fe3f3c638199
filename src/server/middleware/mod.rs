//! Request middleware.
//!
//! - [`session::rotate_session_cookie`] runs in front of the session layer and re-signs cookies
//!   signed with a retired secret.
//! - [`user::load_user`] resolves the session user once per request into [`user::CurrentUser`].
//! - [`admin::require_admin`] gates admin routes on that extension.

pub mod admin;
pub mod session;
pub mod user;
