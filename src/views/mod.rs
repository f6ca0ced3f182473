pub mod calendar;
pub mod metrics;
pub mod scurve;

pub use calendar::{month_grid, tasks_on, CalendarDay, MonthGrid};
pub use metrics::{schedule_metrics, ScheduleMetrics};
pub use scurve::{build_scurve, progress_weight, ScurvePoint};
