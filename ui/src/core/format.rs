//! Formatting helpers for presenting measurements.

use time::macros::format_description;
use time::OffsetDateTime;

pub fn format_mmhg(value: f64) -> String {
    format!("{value:.1} mmHg")
}

pub fn format_minutes(value: i64) -> String {
    format!("{value} min")
}

/// Calendar-date label like `Jan 3, 2026`.
pub fn format_date(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// Zero-padded time of day like `08:30`.
pub fn format_clock(ts: OffsetDateTime) -> String {
    ts.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// ISO calendar date like `2026-01-03`. Used for deterministic group ids.
pub fn format_iso_date(ts: OffsetDateTime) -> String {
    ts.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
