//! Timeline geometry.
//!
//! Turns packed lanes and a date span into rectangles, group bands, and
//! gridline positions in abstract layout units. Rendering concerns
//! (insets, colors, clipping) stay with the caller; this module only does
//! arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::layout::lanes::pack_lanes;
use crate::model::{TaskId, TaskItem, TimelineSpan};

pub const MIN_DAY_WIDTH: f32 = 2.0;
pub const MAX_DAY_WIDTH: f32 = 80.0;
const ZOOM_STEP: f32 = 1.2;

/// Tunable layout knobs.
///
/// Every field has a serde default, so a partially specified config
/// deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Horizontal units per calendar day; doubles as the zoom level.
    pub day_width: f32,
    /// Vertical units per lane.
    pub row_height: f32,
    /// The date span is widened to at least this many days.
    pub min_visible_days: u32,
    /// Explicit band order. Listed groups come first and keep a band even
    /// when empty; remaining groups follow lexicographically.
    pub group_order: Vec<String>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            day_width: 18.0,
            row_height: 38.0,
            min_visible_days: 21,
            group_order: Vec::new(),
        }
    }
}

impl LayoutParams {
    /// Step the zoom up one notch, capped at [`MAX_DAY_WIDTH`].
    pub fn zoom_in(&mut self) {
        self.day_width = (self.day_width * ZOOM_STEP).min(MAX_DAY_WIDTH);
    }

    /// Step the zoom down one notch, floored at [`MIN_DAY_WIDTH`].
    pub fn zoom_out(&mut self) {
        self.day_width = (self.day_width / ZOOM_STEP).max(MIN_DAY_WIDTH);
    }
}

/// Placed rectangle for one task, in layout units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRect {
    pub id: TaskId,
    pub lane: usize,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    /// Full lane height; any visual gap between bars is the renderer's.
    pub height: f32,
}

/// Vertical band occupied by one group's lanes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBand {
    pub group: String,
    pub top: f32,
    pub height: f32,
    pub lane_count: usize,
}

/// One vertical gridline per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub date: NaiveDate,
    pub x: f32,
    /// True on Mondays, for heavier week rules.
    pub week_start: bool,
}

/// Where the current date falls on the grid.
///
/// A date outside the span is reported as such, never clamped into view;
/// the caller decides whether to hide the marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TodayMarker {
    Visible { x: f32 },
    OutOfRange,
}

/// Complete geometry for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineGrid {
    pub span: TimelineSpan,
    pub items: Vec<ItemRect>,
    pub bands: Vec<GroupBand>,
    pub gridlines: Vec<GridLine>,
    pub today: TodayMarker,
    pub total_width: f32,
    pub total_height: f32,
}

/// Lay out tasks over their own date envelope.
pub fn build_grid(items: &[TaskItem], params: &LayoutParams, today: NaiveDate) -> TimelineGrid {
    let span = TimelineSpan::from_items(items, today, params.min_visible_days);
    build_grid_with_span(items, span, params, today)
}

/// Lay out tasks over a caller-chosen span.
///
/// Tasks outside the span still get rectangles, with negative or
/// overflowing `left`; clipping them is the renderer's concern. Span
/// length is not sanity-checked either, so an absurd range allocates
/// proportionally many gridlines.
pub fn build_grid_with_span(
    items: &[TaskItem],
    span: TimelineSpan,
    params: &LayoutParams,
    today: NaiveDate,
) -> TimelineGrid {
    let mut groups: BTreeMap<&str, Vec<&TaskItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.group.as_str()).or_default().push(item);
    }

    let mut order: Vec<&str> = Vec::new();
    for label in &params.group_order {
        if !order.contains(&label.as_str()) {
            order.push(label.as_str());
        }
    }
    for label in groups.keys().copied() {
        if !order.contains(&label) {
            order.push(label);
        }
    }

    let mut bands = Vec::with_capacity(order.len());
    let mut rects = Vec::with_capacity(items.len());
    let mut top = 0.0_f32;
    for label in order {
        let members = groups.get(label).map(Vec::as_slice).unwrap_or(&[]);
        let plan = pack_lanes(members.iter().copied());
        let height = params.row_height * plan.lane_count.max(1) as f32;
        for member in members {
            if let Some(lane) = plan.lane(&member.id) {
                rects.push(ItemRect {
                    id: member.id.clone(),
                    lane,
                    left: span.offset_days(member.start) as f32 * params.day_width,
                    top: top + lane as f32 * params.row_height,
                    width: member.duration_days().max(1) as f32 * params.day_width,
                    height: params.row_height,
                });
            }
        }
        bands.push(GroupBand {
            group: label.to_string(),
            top,
            height,
            lane_count: plan.lane_count,
        });
        top += height;
    }

    let gridlines = span
        .days()
        .enumerate()
        .map(|(day, date)| GridLine {
            date,
            x: day as f32 * params.day_width,
            week_start: date.weekday() == Weekday::Mon,
        })
        .collect();

    let today_marker = if span.contains(today) {
        TodayMarker::Visible {
            x: span.offset_days(today) as f32 * params.day_width,
        }
    } else {
        TodayMarker::OutOfRange
    };

    TimelineGrid {
        span,
        items: rects,
        bands,
        gridlines,
        today: today_marker,
        total_width: span.day_count() as f32 * params.day_width,
        total_height: top.max(params.row_height),
    }
}
