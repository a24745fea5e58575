use dioxus::prelude::*;

use crate::core::chart::chart_points;
use crate::core::format;
use crate::core::grouping::MeasurementGroup;
use crate::records::format_timestamp;

struct TableRow {
    time: String,
    left: String,
    right: String,
    average: String,
    patient: String,
    note: String,
}

#[component]
pub fn GroupTable(group: MeasurementGroup) -> Element {
    let points = chart_points(&group);
    let rows: Vec<TableRow> = group
        .records
        .iter()
        .zip(points.iter())
        .map(|(record, point)| TableRow {
            time: format_timestamp(record),
            left: format::format_mmhg(point.left),
            right: format::format_mmhg(point.right),
            average: format::format_mmhg(point.average),
            patient: record.patient.clone(),
            note: record.note.clone(),
        })
        .collect();

    rsx! {
        div { class: "group-table",
            if rows.is_empty() {
                p { class: "group-card__placeholder", "No readings in this group yet." }
            } else {
                table { class: "group-table__grid",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Left" }
                            th { "Right" }
                            th { "Average" }
                            th { "Patient" }
                            th { "Note" }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            tr {
                                td { class: "group-table__time", "{row.time}" }
                                td { "{row.left}" }
                                td { "{row.right}" }
                                td { "{row.average}" }
                                td { "{row.patient}" }
                                td { class: "group-table__note", "{row.note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
