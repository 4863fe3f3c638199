use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{hooks::use_optional_user, router::Route, store::user::UserState};

#[component]
pub fn Login() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let user = use_optional_user();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            use crate::{client::util::api, model::user::LoginDto};

            let mut user_state = user_state;
            let mut error = error;
            let mut pending = pending;

            let credentials = LoginDto {
                email: email(),
                password: password(),
            };

            pending.set(true);
            spawn(async move {
                match api::login(&credentials).await {
                    // Confirmed users are sent home by the guard once the state updates
                    Ok(user) => {
                        error.set(None);
                        user_state.set(UserState::fetched(Some(user)));
                    }
                    Err(err) => error.set(Some(err)),
                }
                pending.set(false);
            });
        }
    };

    rsx!(
        Title { "Login | Portfolio" }
        h1 { "Login" }
        if let Some(user) = user {
            p { class: "notice",
                "Logged in as {user.email}. Follow the link we sent you to confirm your account."
            }
        }
        form { class: "form", onsubmit,
            label { "Email"
                input {
                    r#type: "email",
                    autocomplete: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    autocomplete: "current-password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if let Some(error) = error() {
                p { class: "form-error", "{error}" }
            }
            button { r#type: "submit", class: "btn btn-primary", disabled: pending(), "Login" }
        }
        p {
            "No account yet? "
            Link { to: Route::Register {}, "Register" }
        }
    )
}
