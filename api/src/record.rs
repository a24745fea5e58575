//! Measurement record shape shared between the source client and the UI.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// One eye-pressure observation as stored in the document database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub id: String,
    /// Subject the reading belongs to.
    pub patient: String,
    /// RFC 3339 timestamp. Source of truth for every derived field.
    pub measured_at: String,
    /// Left-eye pressure in mmHg.
    pub left_eye: f64,
    /// Right-eye pressure in mmHg.
    pub right_eye: f64,
    /// `true` for readings taken as part of a continuous 24-hour protocol.
    pub is_continuous: bool,
    pub note: String,
}

impl MeasurementRecord {
    /// Decode a raw document into a record.
    ///
    /// Per-field shapes are not trusted: anything missing falls back to a
    /// benign default. A document without a parseable `date` is unusable for
    /// grouping and yields `None`; the caller decides how loudly to drop it.
    pub fn from_document(doc: &Value) -> Option<Self> {
        let measured_at = doc.get("date").and_then(Value::as_str)?;
        OffsetDateTime::parse(measured_at, &Rfc3339).ok()?;

        Some(Self {
            id: string_field(doc, "$id"),
            patient: string_field(doc, "name"),
            measured_at: measured_at.to_string(),
            left_eye: number_field(doc, "left"),
            right_eye: number_field(doc, "right"),
            is_continuous: doc.get("is24h").and_then(Value::as_bool).unwrap_or(false),
            note: string_field(doc, "memo"),
        })
    }
}

fn string_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn number_field(doc: &Value, key: &str) -> f64 {
    doc.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_complete_document() {
        let doc = json!({
            "$id": "rec-1",
            "name": "J. Park",
            "date": "2026-01-03T08:30:00Z",
            "left": 17.5,
            "right": 16.0,
            "is24h": true,
            "memo": "after drops",
        });

        let record = MeasurementRecord::from_document(&doc).expect("decodes");
        assert_eq!(record.id, "rec-1");
        assert_eq!(record.patient, "J. Park");
        assert_eq!(record.measured_at, "2026-01-03T08:30:00Z");
        assert_eq!(record.left_eye, 17.5);
        assert_eq!(record.right_eye, 16.0);
        assert!(record.is_continuous);
        assert_eq!(record.note, "after drops");
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let doc = json!({ "date": "2026-01-03T08:30:00Z" });

        let record = MeasurementRecord::from_document(&doc).expect("decodes");
        assert_eq!(record.id, "");
        assert_eq!(record.patient, "");
        assert_eq!(record.left_eye, 0.0);
        assert_eq!(record.right_eye, 0.0);
        assert!(!record.is_continuous);
        assert_eq!(record.note, "");
    }

    #[test]
    fn document_without_date_is_dropped() {
        let doc = json!({ "$id": "rec-2", "left": 14.0 });
        assert!(MeasurementRecord::from_document(&doc).is_none());
    }

    #[test]
    fn document_with_unparseable_date_is_dropped() {
        let doc = json!({ "$id": "rec-3", "date": "last Tuesday" });
        assert!(MeasurementRecord::from_document(&doc).is_none());
    }
}
