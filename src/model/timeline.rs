use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::TaskItem;

/// Inclusive date window a layout is computed over.
///
/// The span is derived from the tasks themselves (earliest start to latest
/// end) and widened to a minimum number of days so sparse schedules still
/// produce a usable chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    pub start: NaiveDate,
    /// Inclusive end date, always `>= start`.
    pub end: NaiveDate,
}

impl TimelineSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Envelope of all task dates, widened to at least `min_visible_days`.
    ///
    /// With no tasks the span opens at `today` instead, so an empty schedule
    /// still renders a grid around the current date.
    pub fn from_items(items: &[TaskItem], today: NaiveDate, min_visible_days: u32) -> Self {
        let (start, end) = match items.iter().map(|t| (t.start, t.end)).reduce(
            |(lo, hi), (s, e)| (lo.min(s), hi.max(e)),
        ) {
            Some(bounds) => bounds,
            None => (today, today),
        };
        let mut span = Self::new(start, end);
        let min_days = i64::from(min_visible_days.max(1));
        if span.day_count() < min_days {
            span.end = span.start + Duration::days(min_days - 1);
        }
        span
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Day offset of `date` from the span start (negative when before it).
    pub fn offset_days(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Whether `date` falls inside the span.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the span, in order. Handy for grid and calendar walks.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.day_count() as usize)
    }
}
