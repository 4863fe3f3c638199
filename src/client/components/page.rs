use dioxus::prelude::*;

/// Page body below the navbar, also sets the browser tab title
#[component]
pub fn Page(title: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        document::Title { "{title} | Portfolio" }
        section {
            class: "page {class}",
            {children}
        }
    )
}
