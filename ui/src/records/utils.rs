use api::MeasurementRecord;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::core::format;
use crate::core::grouping::GroupMode;

pub(crate) fn parse_timestamp(record: &MeasurementRecord) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(record.measured_at.as_str(), &Rfc3339).ok()
}

/// Compact `date · time` label for a record, falling back to the raw
/// timestamp string when it does not parse.
pub(crate) fn format_timestamp(record: &MeasurementRecord) -> String {
    match parse_timestamp(record) {
        Some(ts) => format!("{} · {}", format::format_date(ts), format::format_clock(ts)),
        None => record.measured_at.clone(),
    }
}

pub(crate) fn mode_label(mode: GroupMode) -> &'static str {
    match mode {
        GroupMode::Regular => "Single readings",
        GroupMode::Continuous => "24-hour series",
    }
}
