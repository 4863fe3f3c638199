use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{client::components::Page, model::location::LOCATIONS};

/// Degrees shown around the selected marker
const MAP_SPAN: f64 = 0.01;

#[component]
pub fn LocationMap() -> Element {
    let mut selected = use_signal(|| 0usize);

    let Some(location) = LOCATIONS.get(selected()) else {
        return rsx! {};
    };
    let embed_url = location.embed_url(MAP_SPAN);

    rsx!(
        Title { "Map | Portfolio" }
        Page { title: "Places", class: "map-page",
            h1 { "Places" }
            ul { class: "map-locations",
                for (index, location) in LOCATIONS.iter().enumerate() {
                    li {
                        button {
                            class: if index == selected() { "btn btn-primary" } else { "btn btn-outline" },
                            onclick: move |_| selected.set(index),
                            "{location.name}"
                        }
                    }
                }
            }
            p { "{location.description}" }
            iframe {
                class: "map-frame",
                title: "Map of {location.name}",
                src: "{embed_url}",
            }
        }
    )
}
