//! Greedy first-fit lane packing.
//!
//! Within a group, overlapping tasks must land in different rows. Sorting
//! by start date and always taking the lowest free lane is the classic
//! interval-partitioning greedy: it uses exactly as many lanes as the
//! largest number of tasks sharing any single day, which is the minimum
//! possible.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::model::{TaskId, TaskItem};

/// Lane assignment for one group of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanePlan {
    /// Lane index per task id, zero-based from the top of the group band.
    pub lane_of: BTreeMap<TaskId, usize>,
    /// Number of lanes in use; `0` for an empty group.
    pub lane_count: usize,
}

impl LanePlan {
    pub fn lane(&self, id: &str) -> Option<usize> {
        self.lane_of.get(id).copied()
    }
}

/// Pack one group's tasks into lanes.
///
/// Tasks are taken in `(start, end, id)` order; each goes to the first lane
/// whose last occupied day lies strictly before the task's start. Two tasks
/// sharing a calendar day always land in different lanes; back-to-back
/// tasks (one ending the day before the next begins) share one.
pub fn pack_lanes<'a, I>(items: I) -> LanePlan
where
    I: IntoIterator<Item = &'a TaskItem>,
{
    let mut order: Vec<&TaskItem> = items.into_iter().collect();
    order.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.end.cmp(&b.end))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut lane_ends: Vec<NaiveDate> = Vec::new();
    let mut lane_of = BTreeMap::new();
    for item in order {
        let lane = match lane_ends.iter().position(|end| *end < item.start) {
            Some(free) => {
                lane_ends[free] = item.end;
                free
            }
            None => {
                lane_ends.push(item.end);
                lane_ends.len() - 1
            }
        };
        lane_of.insert(item.id.clone(), lane);
    }
    LanePlan {
        lane_of,
        lane_count: lane_ends.len(),
    }
}

/// Partition tasks by group label and pack each group independently.
///
/// Cross-group overlap is never considered; every group gets its own lane
/// numbering starting at zero.
pub fn pack_by_group(items: &[TaskItem]) -> BTreeMap<String, LanePlan> {
    let mut groups: BTreeMap<&str, Vec<&TaskItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.group.as_str()).or_default().push(item);
    }
    groups
        .into_iter()
        .map(|(label, members)| (label.to_string(), pack_lanes(members)))
        .collect()
}
