//! Cumulative progress curve.
//!
//! Tasks are walked in start order, each contributing a progress weight
//! based on its status; the running total is the classic S-curve. One
//! point is emitted per distinct start date, so the series is a function
//! of the date axis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{TaskItem, TaskStatus};

/// Share of a task's work counted as earned, by status.
pub fn progress_weight(status: TaskStatus) -> f32 {
    match status {
        TaskStatus::Done => 1.0,
        TaskStatus::InProgress => 0.5,
        TaskStatus::Blocked => 0.25,
        TaskStatus::NotStarted => 0.0,
    }
}

/// One sample on the curve. Both fields are percentages of a fully
/// complete schedule, so `cumulative` reaches 100 only when every task
/// is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScurvePoint {
    pub date: NaiveDate,
    /// Progress added by tasks starting on this date.
    pub increment: f32,
    /// Running progress total through this date.
    pub cumulative: f32,
}

/// Build the curve for a task set. Empty input gives an empty series.
pub fn build_scurve(items: &[TaskItem]) -> Vec<ScurvePoint> {
    let mut order: Vec<&TaskItem> = items.iter().collect();
    order.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let total = items.len() as f32;
    let mut cumulative = 0.0_f32;
    let mut points: Vec<ScurvePoint> = Vec::new();
    for item in order {
        let increment = progress_weight(item.status) / total * 100.0;
        cumulative += increment;
        match points.last_mut() {
            Some(last) if last.date == item.start => {
                last.increment += increment;
                last.cumulative = cumulative;
            }
            _ => points.push(ScurvePoint {
                date: item.start,
                increment,
                cumulative,
            }),
        }
    }
    points
}
