use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About | Portfolio" }
        Page { title: "About",
            h1 { "About" }
            p {
                "I started programming by modding games and never really stopped. These days I
                mostly write backend services and spend an unreasonable amount of time on their
                error messages."
            }
            p {
                "Outside of work I organise a local meetup, run long distances slowly and keep a
                task list on this very site."
            }
        }
    )
}
