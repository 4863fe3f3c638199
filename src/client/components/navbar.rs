use dioxus::prelude::*;

use crate::client::{hooks::use_optional_user, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "navbar-title", "Portfolio" }
            }
            ul {
                class: "navbar-links",
                li { Link { to: Route::Resume {}, "Resume" } }
                li { Link { to: Route::Products {}, "Products" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::LocationMap {}, "Map" } }
            }
            div {
                class: "navbar-end",
                AccountLinks {}
            }
        }
    }
}

#[component]
fn AccountLinks() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let user = use_optional_user();

    if !user_state.read().fetched {
        return rsx! {};
    }

    rsx! {
        if let Some(user) = user {
            if user.status.is_confirmed() {
                Link { to: Route::Tasks {}, class: "btn", "Tasks" }
            }
            span { class: "navbar-user", "{user.name}" }
            // Full page navigation so the server clears the session and redirects to /login
            a { href: "/api/auth/logout", class: "btn btn-outline", "Logout" }
        } else {
            Link { to: Route::Login {}, class: "btn", "Login" }
            Link { to: Route::Register {}, class: "btn btn-primary", "Register" }
        }
    }
}
