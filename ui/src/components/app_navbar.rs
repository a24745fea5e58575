use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, inlined so no platform needs its own asset pipeline.
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know each platform's `Route` enum.
///
/// Each closure receives the label and returns a link that already contains
/// that label as its child, preserving styling.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub measurements: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let measurements = (builder.measurements)("Measurements");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {measurements}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Style { "{NAVBAR_CSS_INLINE}" }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Tonolog" }
                    }
                    span { class: "navbar__brand-subtitle", "Eye pressure, charted" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }
            }
        }
    }
}
