use dioxus::prelude::*;

use crate::{client::store::user::UserState, model::user::UserDto};

/// The logged in user, `None` without a session or before the user has been fetched.
pub fn use_optional_user() -> Option<UserDto> {
    let user_state = use_context::<Signal<UserState>>();

    let user = user_state.read().optional_user().cloned();
    user
}

/// The logged in user for components that only render behind `RequireAuthenticated`.
///
/// # Panics
/// Panics when there is no user in session, which means the component was mounted outside of
/// an authenticated route.
pub fn use_user() -> UserDto {
    let user_state = use_context::<Signal<UserState>>();

    let user = match user_state.read().require_user() {
        Ok(user) => user.clone(),
        Err(err) => panic!("{}", err),
    };
    user
}
