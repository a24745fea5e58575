use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Tonolog" }
            p { "Follow intraocular pressure over time, one reading at a time." }

            ul { class: "page-home__features",
                li { "Single readings pooled into one long-running overview" }
                li { "24-hour series grouped by a 30-hour proximity window" }
                li { "Charts with per-eye series and a switchable time axis" }
            }
            p { class: "page-home__cta",
                "Open Measurements to see the latest readings."
            }
        }
    }
}
