//! Tolerant mapping from raw records to canonical tasks.
//!
//! Field names vary wildly between uploads, exports, and hand-edited
//! documents, so every canonical column is resolved through an ordered
//! candidate table: the first key holding a non-null value wins (explicit
//! nulls read as absent), and a value that fails coercion makes the
//! column absent rather than trying later candidates.

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use crate::model::{RawRecord, RawValue, TaskItem, TaskStatus};

pub const ID_FIELDS: &[&str] = &["id"];
pub const NAME_FIELDS: &[&str] = &["name", "task", "label", "title"];
pub const START_FIELDS: &[&str] = &["startDate", "start", "plannedStart", "start_date"];
pub const END_FIELDS: &[&str] = &["endDate", "end", "finish", "plannedFinish", "end_date"];
pub const GROUP_FIELDS: &[&str] = &["zone", "area", "group"];
pub const TRADE_FIELDS: &[&str] = &["trade"];
pub const STATUS_FIELDS: &[&str] = &["status", "state"];

/// Formats tried for text dates, after any ISO time suffix is cut at `T`.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Outcome of normalizing a batch: the usable tasks plus how many records
/// were dropped for lacking a coercible start or end date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub items: Vec<TaskItem>,
    pub dropped: usize,
}

/// Normalize a batch of records, dropping (and counting) the unusable ones.
pub fn normalize_records(records: &[RawRecord]) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    for (index, record) in records.iter().enumerate() {
        match normalize_record(record) {
            Some(item) => report.items.push(item),
            None => {
                report.dropped += 1;
                log::warn!("dropping record {index}: no usable start/end date");
            }
        }
    }
    report
}

/// Map one record to a task, or `None` when either date bound is unusable.
///
/// Everything except the two dates has a default: a missing id is
/// synthesized, group falls back to [`crate::model::UNASSIGNED_GROUP`],
/// status to [`TaskStatus::NotStarted`]. An inverted range collapses to a
/// single day at `start`.
pub fn normalize_record(record: &RawRecord) -> Option<TaskItem> {
    let start = record.first_present(START_FIELDS).and_then(coerce_date)?;
    let end = record.first_present(END_FIELDS).and_then(coerce_date)?;

    let id = record
        .first_present(ID_FIELDS)
        .and_then(coerce_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut item = TaskItem::new(id, start, end);
    if let Some(name) = record.first_present(NAME_FIELDS).and_then(coerce_text) {
        item.name = name.to_string();
    }
    if let Some(group) = record.first_present(GROUP_FIELDS).and_then(coerce_text) {
        item.group = group.to_string();
    }
    item.trade = record
        .first_present(TRADE_FIELDS)
        .and_then(coerce_text)
        .map(str::to_string);
    if let Some(status) = record.first_present(STATUS_FIELDS).and_then(coerce_text) {
        item.status = normalize_status(status);
    }
    Some(item)
}

/// Coerce a field value to a calendar day, or `None` if it has no usable
/// date shape.
pub fn coerce_date(value: &RawValue) -> Option<NaiveDate> {
    match value {
        RawValue::Date(date) => Some(*date),
        RawValue::Text(text) => parse_date_text(text),
        RawValue::Timestamp { seconds } => {
            DateTime::from_timestamp(*seconds, 0).map(|dt| dt.date_naive())
        }
        RawValue::Other(_) => None,
    }
}

/// Trimmed, non-empty text payload of a field.
pub fn coerce_text(value: &RawValue) -> Option<&str> {
    let text = value.as_text()?.trim();
    (!text.is_empty()).then_some(text)
}

/// Ids additionally accept bare numbers, which some exports use.
fn coerce_id(value: &RawValue) -> Option<String> {
    if let RawValue::Other(serde_json::Value::Number(n)) = value {
        return Some(n.to_string());
    }
    coerce_text(value).map(str::to_string)
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Collapse a free-form status string onto the canonical enumeration.
///
/// Case-insensitive substring matching, checked in priority order;
/// anything unrecognized counts as not started.
pub fn normalize_status(raw: &str) -> TaskStatus {
    let lower = raw.to_lowercase();
    if lower.contains("complet") || lower.contains("done") {
        TaskStatus::Done
    } else if lower.contains("block") {
        TaskStatus::Blocked
    } else if lower.contains("progress") || lower.contains("wip") || lower.contains("active") {
        TaskStatus::InProgress
    } else {
        TaskStatus::NotStarted
    }
}
