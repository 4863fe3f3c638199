use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::user::UserState},
    model::{
        auth::{require_authenticated, restrict_authenticated, GuardOutcome, RedirectTarget},
        user::UserDto,
    },
};

/// Renders nested routes for confirmed users, redirects everyone else to `/login`
#[component]
pub fn RequireAuthenticated() -> Element {
    guarded_outlet(require_authenticated)
}

/// Renders nested routes for anonymous and unconfirmed visitors, redirects confirmed users to `/`
#[component]
pub fn RestrictAuthenticated() -> Element {
    guarded_outlet(restrict_authenticated)
}

fn guarded_outlet(guard: fn(Option<&UserDto>) -> GuardOutcome) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    // Re-runs whenever the user state changes, e.g. after login or logout
    use_effect(move || {
        if let GuardOutcome::Redirect(target) = user_state.read().guard(guard) {
            navigator.replace(redirect_route(target));
        }
    });

    let outcome = user_state.read().guard(guard);

    match outcome {
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Pending | GuardOutcome::Redirect(_) => rsx! {},
    }
}

fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Login => Route::Login {},
        RedirectTarget::Home => Route::Home {},
    }
}
