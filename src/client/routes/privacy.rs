use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx!(
        Title { "Privacy Policy | Portfolio" }
        Page { title: "Privacy Policy",
            h1 { "Privacy Policy" }
            h2 { "What is stored" }
            p {
                "If you create an account, your name, email address and a hash of your password are
                stored, along with the tasks you add to your task list."
            }
            h2 { "Cookies" }
            p {
                "A single session cookie keeps you logged in. It is only readable by this site, is
                not used for tracking and expires after seven days of inactivity."
            }
            h2 { "Third parties" }
            p {
                "The map page embeds OpenStreetMap, which receives your IP address when the map
                loads. No other third-party services are used."
            }
        }
    )
}
