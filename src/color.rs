//! Deterministic colors for trades.
//!
//! Well-known trades get fixed palette entries; anything else is hashed
//! to an HSL hue so the same label always draws the same color, with no
//! registry to maintain.

use serde::{Deserialize, Serialize};

use crate::model::UNASSIGNED_GROUP;

/// Fixed palette for the common trades.
const TRADE_PALETTE: &[(&str, &str)] = &[
    ("Electrical", "#F4B400"),
    ("Plumbing", "#0F9D58"),
    ("HVAC", "#DB4437"),
    ("Framing", "#4285F4"),
    ("Drywall", "#AB47BC"),
];

pub const DEFAULT_TRADE_COLOR: &str = "#1A73E8";

/// Palette color for a trade, or the default blue.
pub fn trade_color(trade: &str) -> &'static str {
    TRADE_PALETTE
        .iter()
        .find(|(name, _)| *name == trade)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TRADE_COLOR)
}

/// Hash a label to a hue in `0..360`.
///
/// A rolling 31x accumulator over UTF-16 code units with 32-bit
/// wraparound, so hues match across every client that renders the same
/// schedule.
pub fn hash_hue(label: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in label.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs() % 360
}

/// Fill and border colors for a bar, as CSS `hsl()` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTint {
    pub fill: String,
    pub border: String,
}

/// Tint for a bar by trade label; unlabeled bars share one hue.
pub fn trade_tint(trade: Option<&str>) -> TradeTint {
    let hue = hash_hue(trade.unwrap_or(UNASSIGNED_GROUP));
    TradeTint {
        fill: format!("hsl({hue} 85% 88%)"),
        border: format!("hsl({hue} 70% 45%)"),
    }
}
