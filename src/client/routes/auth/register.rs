use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

#[component]
pub fn Register() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let registered = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            use crate::{client::util::api, model::user::RegisterDto};

            let mut user_state = user_state;
            let mut error = error;
            let mut registered = registered;

            let registration = RegisterDto {
                email: email(),
                name: name(),
                password: password(),
            };

            spawn(async move {
                match api::register(&registration).await {
                    Ok(user) => {
                        error.set(None);
                        registered.set(true);
                        user_state.set(UserState::fetched(Some(user)));
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    if registered() {
        return rsx!(
            Title { "Register | Portfolio" }
            h1 { "Check your inbox" }
            p {
                "We sent a confirmation link to {email}. Follow it to finish setting up your
                account."
            }
        );
    }

    rsx!(
        Title { "Register | Portfolio" }
        h1 { "Register" }
        form { class: "form", onsubmit,
            label { "Name"
                input {
                    autocomplete: "name",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
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
                    autocomplete: "new-password",
                    required: true,
                    minlength: 8,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if let Some(error) = error() {
                p { class: "form-error", "{error}" }
            }
            button { r#type: "submit", class: "btn btn-primary", "Create account" }
        }
        p {
            "Already registered? "
            Link { to: Route::Login {}, "Login" }
        }
    )
}
