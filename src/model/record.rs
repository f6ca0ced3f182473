use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field value from an uploaded or stored document.
///
/// Untagged so arbitrary JSON deserializes without ever failing the whole
/// payload; variant order is the match order. Document-store timestamps
/// (`{"seconds": ...}` objects) and plain ISO dates are recognized here,
/// everything else stays text or falls through to [`RawValue::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Timestamp { seconds: i64 },
    Date(NaiveDate),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    /// Borrow the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this is an explicit JSON `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Other(serde_json::Value::Null))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::Date(d)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(v: serde_json::Value) -> Self {
        RawValue::Other(v)
    }
}

/// A schedule row as it arrived, before any field mapping.
///
/// Keys are kept verbatim; the normalizer probes them through its candidate
/// tables. `BTreeMap` keeps iteration (and serialization) order stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    pub fields: BTreeMap<String, RawValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for tests and examples.
    pub fn with(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    /// Value of the first candidate key holding a non-null value.
    ///
    /// Explicit JSON nulls read as absent (writers store nulls for
    /// cleared fields), so the scan keeps going past them. Any other
    /// present value stops the scan; whether it coerces is the caller's
    /// problem.
    pub fn first_present(&self, candidates: &[&str]) -> Option<&RawValue> {
        candidates
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| !value.is_null())
    }
}
