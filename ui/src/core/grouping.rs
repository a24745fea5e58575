//! Grouping engine: partitions a flat measurement list into display groups.
//!
//! Records split by protocol first. Regular single readings pool into one
//! all-time group; continuous 24-hour readings split into runs using a
//! 30-hour proximity window anchored at each run's first record.

use api::MeasurementRecord;
use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

use super::format;

/// Inclusive window a continuous record may trail its group's first record by.
pub const CONTINUOUS_WINDOW: Duration = Duration::hours(30);

pub const REGULAR_GROUP_ID: &str = "regular";
pub const REGULAR_GROUP_TITLE: &str = "Single readings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Regular,
    Continuous,
}

/// An ordered run of records rendered as one table/chart pair.
///
/// Constructed fresh from the record list on every fetch; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementGroup {
    /// Unique within one result set: `regular`, or `continuous-YYYY-MM-DD`
    /// derived from the anchor record's calendar date.
    pub id: String,
    pub title: String,
    pub mode: GroupMode,
    /// Chronological ascending.
    pub records: Vec<MeasurementRecord>,
}

/// Partition `records` into display groups.
///
/// The regular group (if any regular records exist) always comes first;
/// continuous groups follow in chronological order of their anchor record.
/// Records whose timestamp does not parse are skipped; the record source
/// already drops those, this keeps the function total regardless.
pub fn group_records(records: &[MeasurementRecord]) -> Vec<MeasurementGroup> {
    let mut regular: Vec<(OffsetDateTime, &MeasurementRecord)> = Vec::new();
    let mut continuous: Vec<(OffsetDateTime, &MeasurementRecord)> = Vec::new();

    for record in records {
        let ts = match parse_rfc3339(&record.measured_at) {
            Some(ts) => ts,
            None => continue,
        };
        if record.is_continuous {
            continuous.push((ts, record));
        } else {
            regular.push((ts, record));
        }
    }

    regular.sort_by_key(|(ts, _)| *ts);
    continuous.sort_by_key(|(ts, _)| *ts);

    let mut groups = Vec::new();

    if !regular.is_empty() {
        groups.push(MeasurementGroup {
            id: REGULAR_GROUP_ID.to_string(),
            title: REGULAR_GROUP_TITLE.to_string(),
            mode: GroupMode::Regular,
            records: regular.iter().map(|(_, r)| (*r).clone()).collect(),
        });
    }

    // Greedy forward scan. The window stays anchored at the run's first
    // record; it does not slide as records are appended.
    let mut run: Vec<(OffsetDateTime, &MeasurementRecord)> = Vec::new();
    for (ts, record) in continuous {
        let anchor = run.first().map(|(anchor, _)| *anchor);
        match anchor {
            Some(anchor) if ts - anchor <= CONTINUOUS_WINDOW => run.push((ts, record)),
            Some(_) => {
                groups.push(continuous_group(&run));
                run = vec![(ts, record)];
            }
            None => run.push((ts, record)),
        }
    }
    if !run.is_empty() {
        groups.push(continuous_group(&run));
    }

    groups
}

fn continuous_group(run: &[(OffsetDateTime, &MeasurementRecord)]) -> MeasurementGroup {
    let (anchor, _) = run[0];
    MeasurementGroup {
        id: format!("continuous-{}", format::format_iso_date(anchor)),
        title: format!("24-hour series · {}", format::format_date(anchor)),
        mode: GroupMode::Continuous,
        records: run.iter().map(|(_, r)| (*r).clone()).collect(),
    }
}

/// Parse RFC 3339; `None` on failure.
fn parse_rfc3339(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}
