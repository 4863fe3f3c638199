use dioxus::prelude::*;

use crate::client::{
    components::{Footer, Navbar},
    router::Route,
};

/// Content pages: navbar, page content, footer
#[component]
pub fn ContentLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "content",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

/// Account forms: a single centred card
#[component]
pub fn FormLayout() -> Element {
    rsx! {
        main { class: "form-layout",
            div { class: "card",
                Link { to: Route::Home {}, class: "form-layout-home", "← Back to the site" }
                Outlet::<Route> {}
            }
        }
    }
}
