use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Retrieve the session user once on load, guards stay pending until this completes
    #[cfg(feature = "web")]
    use_effect(move || {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_user;

        let mut user_state = user_state;

        spawn(async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!("Failed to retrieve user: {}", err);
                    None
                }
            };

            user_state.set(UserState::fetched(user));
        });
    });

    #[cfg(not(feature = "web"))]
    let _ = user_state;

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
