use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group label applied when a record carries no zone/area information.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Stable task identifier.
///
/// Kept opaque (document-store ids, import row ids, and synthesized UUIDs
/// all flow through unchanged), so this is a plain string alias.
pub type TaskId = String;

/// Canonical schedule status, collapsed from the free-form strings found
/// in uploads and documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Blocked,
    #[serde(alias = "Completed")]
    Done,
}

impl TaskStatus {
    /// Human-readable label matching the upload vocabulary.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single normalized schedule task.
///
/// This is the canonical form every layout and reporting function consumes:
/// day-granularity bounds, a packing group (construction zone), and the
/// pass-through fields renderers label bars with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub name: String,
    pub start: NaiveDate,
    /// Inclusive end date. Invariant: `start <= end` (the normalizer
    /// collapses inverted ranges to a single day at `start`).
    pub end: NaiveDate,
    /// Packing partition; defaults to [`UNASSIGNED_GROUP`].
    pub group: String,
    /// Optional trade/crew label, used for coloring and handover detection.
    pub trade: Option<String>,
    pub status: TaskStatus,
}

impl TaskItem {
    /// Create a task with defaults for the pass-through fields.
    pub fn new(id: impl Into<TaskId>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start,
            end: end.max(start),
            group: UNASSIGNED_GROUP.to_string(),
            trade: None,
            status: TaskStatus::NotStarted,
        }
    }

    /// Inclusive duration in days (a single-day task is 1 day long).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether this task occupies the given calendar day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whether two tasks share at least one calendar day.
    pub fn overlaps(&self, other: &TaskItem) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
