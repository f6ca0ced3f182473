//! Lane-packing timeline layout for construction schedules.
//!
//! Takes task records of almost any shape, normalizes them into
//! day-bounded tasks, packs overlapping tasks into lanes per zone, and
//! hands the renderer plain rectangle geometry. Sibling views (S-curve,
//! metrics, month calendar, handovers) consume the same normalized tasks.
//!
//! ```
//! use takt_layout::{build_grid, tasks_from_json_str, LayoutParams};
//!
//! let payload = r#"[
//!     {"id": "a", "name": "Forming", "zone": "Z1",
//!      "startDate": "2024-01-01", "endDate": "2024-01-05"},
//!     {"id": "b", "name": "Pouring", "zone": "Z1",
//!      "startDate": "2024-01-03", "endDate": "2024-01-07"}
//! ]"#;
//!
//! let report = tasks_from_json_str(payload)?;
//! assert_eq!(report.dropped, 0);
//!
//! let today = "2024-01-04".parse()?;
//! let grid = build_grid(&report.items, &LayoutParams::default(), today);
//! assert_eq!(grid.bands[0].lane_count, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod error;
pub mod handover;
pub mod ingest;
pub mod layout;
pub mod model;
pub mod views;

pub use error::{Result, ScheduleError};
pub use ingest::{normalize_records, records_from_json_str, tasks_from_json_str, NormalizeReport};
pub use layout::{
    build_grid, build_grid_with_span, pack_by_group, pack_lanes, LanePlan, LayoutParams,
    TimelineGrid,
};
pub use model::{RawRecord, RawValue, TaskItem, TaskStatus, TimelineSpan};
