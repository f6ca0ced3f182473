pub mod json;
pub mod normalize;

pub use json::{records_from_json_str, records_from_value};
pub use normalize::{
    coerce_date, coerce_text, normalize_record, normalize_records, normalize_status,
    NormalizeReport,
};

use crate::error::Result;

/// Parse a JSON payload and normalize it in one step.
pub fn tasks_from_json_str(payload: &str) -> Result<NormalizeReport> {
    Ok(normalize_records(&records_from_json_str(payload)?))
}
