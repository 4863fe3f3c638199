use thiserror::Error;

use crate::model::{
    auth::{evaluate_guard, GuardOutcome},
    user::UserDto,
};

/// The logged in user as known to the client.
///
/// Provided as a `Signal<UserState>` context by [`App`](crate::client::App). `fetched` stays
/// false until the first `GET /api/auth/user` completes so guards do not redirect early.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

/// Returned by [`UserState::require_user`] when there is no user in session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No user in session: the required user accessor was used outside of an authenticated route")]
pub struct MissingUser;

impl UserState {
    /// State after the current user has been fetched, `None` meaning no session.
    pub fn fetched(user: Option<UserDto>) -> Self {
        Self {
            user,
            fetched: true,
        }
    }

    pub fn optional_user(&self) -> Option<&UserDto> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&UserDto, MissingUser> {
        self.user.as_ref().ok_or(MissingUser)
    }

    pub fn guard(&self, guard: fn(Option<&UserDto>) -> GuardOutcome) -> GuardOutcome {
        evaluate_guard(self.fetched, self.optional_user(), guard)
    }
}
