pub mod record;
pub mod task;
pub mod timeline;

pub use record::{RawRecord, RawValue};
pub use task::{TaskId, TaskItem, TaskStatus, UNASSIGNED_GROUP};
pub use timeline::TimelineSpan;
