use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "© Portfolio" }
            Link { to: Route::PrivacyPolicy {}, "Privacy Policy" }
            ul { class: "footer-social",
                li {
                    a { href: "https://github.com", "aria-label": "GitHub",
                        Icon { width: 20, height: 20, icon: FaGithub }
                    }
                }
                li {
                    a { href: "https://www.linkedin.com", "aria-label": "LinkedIn",
                        Icon { width: 20, height: 20, icon: FaLinkedin }
                    }
                }
            }
        }
    }
}
