use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::user::UserState},
    model::user::UserDto,
};

#[derive(Debug, Clone, PartialEq)]
enum Confirmation {
    Pending,
    Confirmed(UserDto),
    Failed(String),
}

/// Whether the visitor's own session belongs to the account that was just confirmed
fn confirms_session_user(session_user: Option<&UserDto>, confirmed: &UserDto) -> bool {
    session_user.is_some_and(|session_user| session_user.id == confirmed.id)
}

#[component]
pub fn Confirm(token: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();
    let confirmation = use_signal(|| Confirmation::Pending);

    // Confirm once on load, the token is single use
    #[cfg(feature = "web")]
    use_hook(move || {
        use crate::client::util::api;

        let mut confirmation = confirmation;

        spawn(async move {
            match api::confirm(&token).await {
                Ok(user) => confirmation.set(Confirmation::Confirmed(user)),
                Err(err) => confirmation.set(Confirmation::Failed(err)),
            }
        });
    });

    #[cfg(not(feature = "web"))]
    let _ = token;

    rsx!(
        Title { "Confirm account | Portfolio" }
        h1 { "Confirm account" }
        match confirmation() {
            Confirmation::Pending => rsx! { p { "Confirming your account…" } },
            Confirmation::Confirmed(user) => {
                // The session user is only refreshed on "Continue": the guard on this page
                // sends confirmed users home as soon as the state changes.
                if confirms_session_user(user_state.read().optional_user(), &user) {
                    rsx! {
                        p { "Your account is confirmed." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_: MouseEvent| {
                                let mut user_state = user_state;

                                navigator.replace(Route::Tasks {});
                                user_state.set(UserState::fetched(Some(user.clone())));
                            },
                            "Continue to your tasks"
                        }
                    }
                } else {
                    rsx! {
                        p { "Your account is confirmed." }
                        Link { to: Route::Login {}, class: "btn btn-primary", "Continue to login" }
                    }
                }
            }
            Confirmation::Failed(error) => rsx! {
                p { class: "form-error", "{error}" }
                Link { to: Route::Register {}, "Register again" }
            },
        }
    )
}
