use dioxus::prelude::*;

use crate::records::{GroupPanel, MeasurementsState};

#[component]
pub fn Measurements() -> Element {
    let mut response = use_resource(|| api::fetch_measurements());

    let state = response.read_unchecked().as_ref().map(|result| {
        MeasurementsState::from_fetch(
            result
                .clone()
                .map_err(|err| format!("Couldn't load measurements: {err}")),
        )
    });

    let content = match state {
        None => rsx! {
            p { class: "measurements__placeholder", "Loading measurements…" }
        },
        Some(state) => {
            if let Some(message) = state.error.clone() {
                rsx! {
                    div { class: "measurements__error",
                        p { "{message}" }
                        button {
                            r#type: "button",
                            class: "measurements__retry",
                            onclick: move |_| response.restart(),
                            "Try again"
                        }
                    }
                }
            } else if state.groups.is_empty() {
                rsx! {
                    p { class: "measurements__placeholder", "No readings recorded yet." }
                }
            } else {
                rsx! {
                    div { class: "measurements__groups",
                        for group in state.groups.iter().cloned() {
                            GroupPanel { key: "{group.id}", group }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page page-measurements",
            h1 { "Measurements" }
            p { "Eye-pressure readings grouped by protocol and proximity in time." }

            {content}
        }
    }
}
