//! Route guard decisions.
//!
//! The guards are plain boolean gates over the session record: they never fail, the only
//! negative outcome is a redirect. Both the client layout components and server side rendering
//! evaluate them through these functions so the two always agree.

use crate::model::user::UserDto;

/// Where a guard sends a visitor it does not admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// `/login`
    Login,
    /// `/`
    Home,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Result of evaluating a guard against the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The current user has not been resolved yet; render nothing and wait.
    Pending,
    /// Render the nested route tree.
    Render,
    /// Navigate away instead of rendering.
    Redirect(RedirectTarget),
}

/// Admits only confirmed users, everyone else is sent to `/login`.
pub fn require_authenticated(user: Option<&UserDto>) -> GuardOutcome {
    match user {
        Some(user) if user.status.is_confirmed() => GuardOutcome::Render,
        _ => GuardOutcome::Redirect(RedirectTarget::Login),
    }
}

/// Admits anonymous and unconfirmed visitors, confirmed users are sent to `/`.
pub fn restrict_authenticated(user: Option<&UserDto>) -> GuardOutcome {
    match user {
        Some(user) if user.status.is_confirmed() => GuardOutcome::Redirect(RedirectTarget::Home),
        _ => GuardOutcome::Render,
    }
}

/// Evaluates `guard` once the user has been fetched, `Pending` before then.
pub fn evaluate_guard(
    fetched: bool,
    user: Option<&UserDto>,
    guard: fn(Option<&UserDto>) -> GuardOutcome,
) -> GuardOutcome {
    if !fetched {
        return GuardOutcome::Pending;
    }

    guard(user)
}
