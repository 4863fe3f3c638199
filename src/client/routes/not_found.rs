use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Portfolio" }
        Page { title: "Not Found", class: "not-found",
            h1 { "404" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    )
}
