use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaFileLines};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, hooks::use_optional_user, router::Route};

#[component]
pub fn Home() -> Element {
    let user = use_optional_user();

    rsx!(
        Title { "Portfolio" }
        Meta {
            name: "description",
            content: "Software engineer building reliable web services and the tools around them."
        }
        Page { title: "Home", class: "hero",
            h1 { "Hi, I build web services." }
            if let Some(user) = user {
                p { class: "hero-greeting", "Welcome back, {user.name}." }
            }
            p {
                "Backend-leaning engineer with a soft spot for type systems, small binaries and
                boring deployments. Have a look at what I have worked on, or get in touch."
            }
            ul { class: "hero-actions",
                li {
                    Link { to: Route::Resume {}, class: "btn btn-primary",
                        Icon { width: 20, height: 20, icon: FaFileLines }
                        "Resume"
                    }
                }
                li {
                    Link { to: Route::Products {}, class: "btn btn-outline",
                        Icon { width: 20, height: 20, icon: FaBoxOpen }
                        "Products"
                    }
                }
            }
        }
    )
}
