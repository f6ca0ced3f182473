//! JSON payload loading.
//!
//! Payloads arrive either as a bare array of records or wrapped in an
//! object with a `tasks` array (the shape document exports use). Malformed
//! JSON fails the whole load; a row of the wrong shape does not: it lands
//! as an empty record, which the normalizer then drops and counts like
//! any other dateless one.

use serde_json::Value;

use crate::error::{Result, ScheduleError};
use crate::model::RawRecord;

/// Parse a payload string into raw records.
pub fn records_from_json_str(payload: &str) -> Result<Vec<RawRecord>> {
    records_from_value(serde_json::from_str(payload)?)
}

/// Extract raw records from an already-parsed JSON value.
pub fn records_from_value(value: Value) -> Result<Vec<RawRecord>> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(rows)) => rows,
            _ => return Err(ScheduleError::MissingTasksArray),
        },
        _ => return Err(ScheduleError::MissingTasksArray),
    };
    Ok(rows.into_iter().map(record_from_row).collect())
}

/// One row to one record. Untagged field values absorb any shape, so an
/// object row never fails; anything else has no fields to probe and
/// lands empty.
fn record_from_row(row: Value) -> RawRecord {
    serde_json::from_value(row).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawValue;

    #[test]
    fn bare_array_and_tasks_object_both_load() {
        let bare = r#"[{"name": "a"}, {"name": "b"}]"#;
        let wrapped = r#"{"project": "Site 4", "tasks": [{"name": "a"}, {"name": "b"}]}"#;
        assert_eq!(records_from_json_str(bare).unwrap().len(), 2);
        assert_eq!(records_from_json_str(wrapped).unwrap().len(), 2);
    }

    #[test]
    fn object_without_tasks_is_an_error() {
        let err = records_from_json_str(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingTasksArray));
        let err = records_from_json_str(r#"{"tasks": "nope"}"#).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingTasksArray));
        let err = records_from_json_str("3").unwrap_err();
        assert!(matches!(err, ScheduleError::MissingTasksArray));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = records_from_json_str("[{").unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn non_object_rows_become_empty_records() {
        let records = records_from_json_str(r#"[{"name": "a"}, 42, null, "stray"]"#).unwrap();
        assert_eq!(records.len(), 4);
        assert_ne!(records[0], RawRecord::new());
        assert_eq!(records[1], RawRecord::new());
        assert_eq!(records[2], RawRecord::new());
        assert_eq!(records[3], RawRecord::new());
    }

    #[test]
    fn field_values_survive_verbatim() {
        let records =
            records_from_json_str(r#"[{"startDate": {"seconds": 1704412800}, "zone": "A"}]"#)
                .unwrap();
        assert_eq!(
            records[0].get("startDate"),
            Some(&RawValue::Timestamp { seconds: 1_704_412_800 })
        );
        assert_eq!(records[0].get("zone"), Some(&RawValue::Text("A".to_string())));
    }
}
