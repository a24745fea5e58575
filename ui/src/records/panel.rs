use dioxus::prelude::*;

use crate::core::grouping::{GroupMode, MeasurementGroup};
use crate::records::{mode_label, GroupTable, PressureChart};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelView {
    Table,
    Chart,
}

#[component]
pub fn GroupPanel(group: MeasurementGroup) -> Element {
    let mode = group.mode;
    // Continuous runs open on the chart; the regular pool reads better as a
    // table first.
    let mut view = use_signal(move || match mode {
        GroupMode::Continuous => PanelView::Chart,
        GroupMode::Regular => PanelView::Table,
    });

    let record_count = group.records.len();
    let count_label = if record_count == 1 {
        "1 reading".to_string()
    } else {
        format!("{record_count} readings")
    };

    rsx! {
        section { class: "group-card",
            div { class: "group-card__header",
                div { class: "group-card__heading",
                    h2 { "{group.title}" }
                    span { class: "group-card__meta", "{mode_label(group.mode)} · {count_label}" }
                }
                div { class: "group-card__toggle",
                    button {
                        r#type: "button",
                        class: toggle_class(view() == PanelView::Table),
                        onclick: move |_| view.set(PanelView::Table),
                        "Table"
                    }
                    button {
                        r#type: "button",
                        class: toggle_class(view() == PanelView::Chart),
                        onclick: move |_| view.set(PanelView::Chart),
                        "Chart"
                    }
                }
            }

            match view() {
                PanelView::Table => rsx! {
                    GroupTable { group: group.clone() }
                },
                PanelView::Chart => rsx! {
                    PressureChart { group: group.clone() }
                },
            }
        }
    }
}

fn toggle_class(active: bool) -> String {
    if active {
        "group-card__toggle-button group-card__toggle-button--active".to_string()
    } else {
        "group-card__toggle-button".to_string()
    }
}
