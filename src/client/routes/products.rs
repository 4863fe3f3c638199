use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

struct Product {
    name: &'static str,
    description: &'static str,
    url: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        name: "Ledgerline",
        description: "Double-entry bookkeeping for freelancers, with bank import and tax reports.",
        url: "https://example.com/ledgerline",
    },
    Product {
        name: "Shiftboard",
        description: "Shift planning for small teams that outgrew the spreadsheet.",
        url: "https://example.com/shiftboard",
    },
    Product {
        name: "Pinpoint",
        description: "Self-hosted uptime checks with alerts that do not cry wolf.",
        url: "https://example.com/pinpoint",
    },
];

#[component]
pub fn Products() -> Element {
    rsx!(
        Title { "Products | Portfolio" }
        Page { title: "Products",
            h1 { "Products" }
            div { class: "product-grid",
                for product in PRODUCTS {
                    article { class: "card",
                        h2 { "{product.name}" }
                        p { "{product.description}" }
                        a { href: product.url, class: "btn btn-outline", "Visit" }
                    }
                }
            }
        }
    )
}
