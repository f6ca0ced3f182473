//! Month-grid view of a schedule.
//!
//! Lays one month out as full Sunday-to-Saturday weeks, with the tasks
//! active on each day. Cells from the neighboring months that pad the
//! first and last week are flagged so a renderer can dim them.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{TaskId, TaskItem};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for padding days belonging to the previous or next month.
    pub in_month: bool,
    /// Ids of tasks active on this day, in input order.
    pub task_ids: Vec<TaskId>,
}

/// A month rendered as whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Always a multiple of seven cells, starting on a Sunday.
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// The grid rows, one week per slice.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Build the grid for the month containing `anchor`.
pub fn month_grid(anchor: NaiveDate, items: &[TaskItem]) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap_or(anchor);
    let next_first = if anchor.month() == 12 {
        NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
    }
    .unwrap_or(first);
    let last = next_first - Duration::days(1);

    let grid_start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let grid_end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

    let mut days = Vec::new();
    let mut date = grid_start;
    while date <= grid_end {
        days.push(CalendarDay {
            date,
            in_month: date.year() == anchor.year() && date.month() == anchor.month(),
            task_ids: tasks_on(items, date).iter().map(|t| t.id.clone()).collect(),
        });
        date += Duration::days(1);
    }

    MonthGrid {
        year: anchor.year(),
        month: anchor.month(),
        days,
    }
}

/// Tasks whose date range covers `day`, in input order.
pub fn tasks_on(items: &[TaskItem], day: NaiveDate) -> Vec<&TaskItem> {
    items.iter().filter(|t| t.covers(day)).collect()
}
