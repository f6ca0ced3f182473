//! Headline numbers for a schedule.

use serde::{Deserialize, Serialize};

use crate::model::{TaskItem, TaskStatus};

/// Status counts and summary figures, ready for a dashboard card row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub done: usize,
    /// Mean inclusive task length, rounded to whole days.
    pub avg_duration_days: i64,
    /// Share of done tasks, rounded to a whole percent.
    pub completion_rate: u32,
}

/// Compute metrics over a task set. An empty set is all zeroes.
pub fn schedule_metrics(items: &[TaskItem]) -> ScheduleMetrics {
    let mut metrics = ScheduleMetrics {
        total: items.len(),
        ..ScheduleMetrics::default()
    };
    let mut duration_sum = 0i64;
    for item in items {
        match item.status {
            TaskStatus::NotStarted => metrics.not_started += 1,
            TaskStatus::InProgress => metrics.in_progress += 1,
            TaskStatus::Blocked => metrics.blocked += 1,
            TaskStatus::Done => metrics.done += 1,
        }
        duration_sum += item.duration_days();
    }
    if metrics.total > 0 {
        let total = metrics.total as f64;
        metrics.avg_duration_days = (duration_sum as f64 / total).round() as i64;
        metrics.completion_rate = (metrics.done as f64 / total * 100.0).round() as u32;
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(id: &str, start: &str, end: &str, status: TaskStatus) -> TaskItem {
        let mut t = TaskItem::new(id, d(start), d(end));
        t.status = status;
        t
    }

    #[test]
    fn empty_schedule_is_all_zeroes() {
        assert_eq!(schedule_metrics(&[]), ScheduleMetrics::default());
    }

    #[test]
    fn counts_and_rates_add_up() {
        let items = vec![
            task("a", "2024-01-01", "2024-01-05", TaskStatus::Done),
            task("b", "2024-01-01", "2024-01-02", TaskStatus::Done),
            task("c", "2024-01-03", "2024-01-03", TaskStatus::InProgress),
            task("d", "2024-01-04", "2024-01-07", TaskStatus::Blocked),
            task("e", "2024-01-08", "2024-01-08", TaskStatus::NotStarted),
            task("f", "2024-01-09", "2024-01-10", TaskStatus::NotStarted),
        ];
        let m = schedule_metrics(&items);
        assert_eq!(m.total, 6);
        assert_eq!(m.done, 2);
        assert_eq!(m.in_progress, 1);
        assert_eq!(m.blocked, 1);
        assert_eq!(m.not_started, 2);
        // Inclusive durations 5+2+1+4+1+2 = 15, mean 2.5 rounds to 3.
        assert_eq!(m.avg_duration_days, 3);
        // 2 of 6 done = 33.33..% rounds to 33.
        assert_eq!(m.completion_rate, 33);
    }

    #[test]
    fn single_day_tasks_count_one_day() {
        let items = vec![task("a", "2024-01-05", "2024-01-05", TaskStatus::Done)];
        let m = schedule_metrics(&items);
        assert_eq!(m.avg_duration_days, 1);
        assert_eq!(m.completion_rate, 100);
    }
}
