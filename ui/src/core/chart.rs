//! Chart transform: maps a group's records onto plot-ready points.

use api::MeasurementRecord;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::format;
use super::grouping::{GroupMode, MeasurementGroup};

/// One record prepared for plotting. Never persisted; recomputed whenever
/// the group changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub left: f64,
    pub right: f64,
    /// Arithmetic mean of the two readings, full precision. Rounding is the
    /// presentation layer's problem.
    pub average: f64,
    /// Original timestamp string, kept for re-derivation.
    pub measured_at: String,
    /// Whole minutes since the group's first record, rounded to nearest.
    pub minutes_from_start: i64,
}

/// Derive one point per record, preserving the group's chronological order.
///
/// Callers supply a sorted group (the grouping engine guarantees one), so
/// `minutes_from_start` is non-decreasing across the output.
pub fn chart_points(group: &MeasurementGroup) -> Vec<ChartPoint> {
    let anchor = match group.records.first().and_then(parse) {
        Some(anchor) => anchor,
        None => return Vec::new(),
    };

    group
        .records
        .iter()
        .filter_map(|record| {
            let ts = parse(record)?;
            Some(ChartPoint {
                label: point_label(group.mode, anchor, ts),
                left: record.left_eye,
                right: record.right_eye,
                average: (record.left_eye + record.right_eye) / 2.0,
                measured_at: record.measured_at.clone(),
                minutes_from_start: minutes_between(anchor, ts),
            })
        })
        .collect()
}

fn parse(record: &MeasurementRecord) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(record.measured_at.as_str(), &Rfc3339).ok()
}

fn minutes_between(anchor: OffsetDateTime, ts: OffsetDateTime) -> i64 {
    ((ts - anchor).whole_seconds() as f64 / 60.0).round() as i64
}

/// Continuous groups label points with the time of day, marked `+N` once the
/// calendar day differs from the anchor's. Regular groups label points with
/// the calendar date.
fn point_label(mode: GroupMode, anchor: OffsetDateTime, ts: OffsetDateTime) -> String {
    match mode {
        GroupMode::Regular => format::format_date(ts),
        GroupMode::Continuous => {
            let clock = format::format_clock(ts);
            let day_offset =
                i64::from(ts.date().to_julian_day() - anchor.date().to_julian_day());
            if day_offset > 0 {
                format!("+{day_offset} {clock}")
            } else {
                clock
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::{GroupMode, MeasurementGroup};
    use time::macros::datetime;
    use time::Duration;

    fn record(measured_at: OffsetDateTime, left: f64, right: f64) -> MeasurementRecord {
        MeasurementRecord {
            id: format!("rec-{measured_at}"),
            patient: "test".into(),
            measured_at: measured_at.format(&Rfc3339).unwrap(),
            left_eye: left,
            right_eye: right,
            is_continuous: true,
            note: String::new(),
        }
    }

    fn group(mode: GroupMode, records: Vec<MeasurementRecord>) -> MeasurementGroup {
        MeasurementGroup {
            id: "test".into(),
            title: "test".into(),
            mode,
            records,
        }
    }

    const T: OffsetDateTime = datetime!(2026-01-03 08:30 UTC);

    #[test]
    fn empty_group_yields_no_points() {
        let g = group(GroupMode::Continuous, Vec::new());
        assert!(chart_points(&g).is_empty());
    }

    #[test]
    fn first_point_starts_at_zero_minutes() {
        let g = group(
            GroupMode::Continuous,
            vec![record(T, 14.0, 15.0), record(T + Duration::hours(2), 16.0, 17.0)],
        );

        let points = chart_points(&g);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].minutes_from_start, 0);
        assert_eq!(points[1].minutes_from_start, 120);
    }

    #[test]
    fn average_is_the_exact_mean() {
        let g = group(GroupMode::Continuous, vec![record(T, 14.5, 17.0)]);
        let points = chart_points(&g);
        assert_eq!(points[0].average, (14.5 + 17.0) / 2.0);
    }

    #[test]
    fn minutes_round_to_the_nearest_whole_minute() {
        let g = group(
            GroupMode::Continuous,
            vec![record(T, 14.0, 15.0), record(T + Duration::seconds(90), 14.0, 15.0)],
        );

        let points = chart_points(&g);
        assert_eq!(points[1].minutes_from_start, 2);
    }

    #[test]
    fn continuous_labels_use_clock_time() {
        let g = group(GroupMode::Continuous, vec![record(T, 14.0, 15.0)]);
        assert_eq!(chart_points(&g)[0].label, "08:30");
    }

    #[test]
    fn next_day_gets_a_plus_one_marker() {
        let g = group(
            GroupMode::Continuous,
            vec![record(T, 14.0, 15.0), record(T + Duration::hours(18), 14.0, 15.0)],
        );

        let points = chart_points(&g);
        assert_eq!(points[1].label, "+1 02:30");
    }

    #[test]
    fn a_second_midnight_gets_a_plus_two_marker() {
        // Anchored at 23:30, a reading 25.5 h later sits two calendar days
        // out while still inside the 30-hour window.
        let late = datetime!(2026-01-03 23:30 UTC);
        let g = group(
            GroupMode::Continuous,
            vec![
                record(late, 14.0, 15.0),
                record(late + Duration::minutes(25 * 60 + 30), 14.0, 15.0),
            ],
        );

        let points = chart_points(&g);
        assert_eq!(points[1].label, "+2 01:00");
    }

    #[test]
    fn regular_labels_are_calendar_dates() {
        let g = group(GroupMode::Regular, vec![record(T, 14.0, 15.0)]);
        assert_eq!(chart_points(&g)[0].label, "Jan 3, 2026");
    }

    #[test]
    fn minutes_are_non_decreasing_over_a_sorted_group() {
        let g = group(
            GroupMode::Continuous,
            vec![
                record(T, 14.0, 15.0),
                record(T + Duration::hours(3), 14.0, 15.0),
                record(T + Duration::hours(9), 14.0, 15.0),
            ],
        );

        let points = chart_points(&g);
        assert!(points
            .windows(2)
            .all(|pair| pair[0].minutes_from_start <= pair[1].minutes_from_start));
    }
}
