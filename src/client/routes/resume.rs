use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

struct Position {
    role: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const POSITIONS: &[Position] = &[
    Position {
        role: "Senior Software Engineer",
        company: "Northwind Logistics",
        period: "2021 – present",
        summary: "Routing and tracking APIs handling millions of shipment events a day.",
    },
    Position {
        role: "Software Engineer",
        company: "Contoso Health",
        period: "2017 – 2021",
        summary: "Patient scheduling platform, from the first prototype to three hospitals.",
    },
    Position {
        role: "Junior Developer",
        company: "Fabrikam Studio",
        period: "2015 – 2017",
        summary: "Client websites and the internal tooling to deploy them.",
    },
];

const SKILLS: &[&str] = &["Rust", "PostgreSQL", "Redis", "Docker", "TypeScript", "Linux"];

#[component]
pub fn Resume() -> Element {
    rsx!(
        Title { "Resume | Portfolio" }
        Page { title: "Resume",
            h1 { "Resume" }
            section {
                h2 { "Experience" }
                for position in POSITIONS {
                    article { class: "resume-entry",
                        h3 { "{position.role} · {position.company}" }
                        p { class: "resume-period", "{position.period}" }
                        p { "{position.summary}" }
                    }
                }
            }
            section {
                h2 { "Skills" }
                ul { class: "tags",
                    for skill in SKILLS {
                        li { "{skill}" }
                    }
                }
            }
        }
    )
}
