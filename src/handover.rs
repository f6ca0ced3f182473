//! Trade handovers.
//!
//! A handover is the point where work in a zone passes from one trade to
//! the next. They can be detected from the schedule itself or supplied by
//! the caller; either way the helpers here dedupe, validate, and format
//! them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::model::{TaskId, TaskItem};

/// A work transition between two tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handover {
    pub from_id: TaskId,
    pub to_id: TaskId,
    /// Intended transition date, when known.
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Handover {
    pub fn new(from_id: impl Into<TaskId>, to_id: impl Into<TaskId>) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            date: None,
            notes: None,
        }
    }
}

/// Validation outcome: hard errors (unknown task ids) and soft warnings
/// (transitions that overlap instead of handing off cleanly).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandoverCheck {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl HandoverCheck {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Handovers touching one task, split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskHandovers<'a> {
    pub incoming: Vec<&'a Handover>,
    pub outgoing: Vec<&'a Handover>,
}

/// Derive handovers from the schedule: within each group, every change of
/// trade between consecutive tasks (in start order) is a transition, dated
/// at the receiving task's start.
///
/// Tasks without a trade label never take part. Whether the two tasks
/// actually overlap is not judged here; run [`validate_handovers`] for
/// that.
pub fn detect_handovers(items: &[TaskItem]) -> Vec<Handover> {
    let mut order: Vec<&TaskItem> = items.iter().filter(|t| t.trade.is_some()).collect();
    order.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then(a.start.cmp(&b.start))
            .then(a.end.cmp(&b.end))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut handovers = Vec::new();
    for pair in order.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from.group == to.group && from.trade != to.trade {
            handovers.push(Handover {
                from_id: from.id.clone(),
                to_id: to.id.clone(),
                date: Some(to.start),
                notes: None,
            });
        }
    }
    handovers
}

/// Drop exact duplicates, keeping first occurrences in order.
pub fn dedupe_handovers(handovers: Vec<Handover>) -> Vec<Handover> {
    let mut seen = HashSet::new();
    handovers
        .into_iter()
        .filter(|h| seen.insert(h.clone()))
        .collect()
}

/// Handovers where `id` is on either end.
pub fn handovers_for_task<'a>(handovers: &'a [Handover], id: &str) -> TaskHandovers<'a> {
    TaskHandovers {
        incoming: handovers.iter().filter(|h| h.to_id == id).collect(),
        outgoing: handovers.iter().filter(|h| h.from_id == id).collect(),
    }
}

/// Check handovers against the task list.
///
/// Unknown ids are errors; a "from" task that ends after its "to" task
/// starts is only a warning, since trades do sometimes run over.
pub fn validate_handovers(handovers: &[Handover], items: &[TaskItem]) -> HandoverCheck {
    let by_id: HashMap<&str, &TaskItem> = items.iter().map(|t| (t.id.as_str(), t)).collect();
    let mut check = HandoverCheck::default();

    for (index, handover) in handovers.iter().enumerate() {
        let number = index + 1;
        if !by_id.contains_key(handover.from_id.as_str()) {
            check
                .errors
                .push(format!("handover #{number}: unknown from id \"{}\"", handover.from_id));
        }
        if !by_id.contains_key(handover.to_id.as_str()) {
            check
                .errors
                .push(format!("handover #{number}: unknown to id \"{}\"", handover.to_id));
        }
        if let (Some(from), Some(to)) = (
            by_id.get(handover.from_id.as_str()),
            by_id.get(handover.to_id.as_str()),
        ) {
            if from.end > to.start {
                check.warnings.push(format!(
                    "handover #{number}: \"{}\" ends after \"{}\" starts",
                    display_name(from),
                    display_name(to),
                ));
            }
        }
    }
    check
}

/// Numbered, human-readable listing. Task names fall back to raw ids.
pub fn handover_report(handovers: &[Handover], items: &[TaskItem]) -> String {
    let by_id: HashMap<&str, &TaskItem> = items.iter().map(|t| (t.id.as_str(), t)).collect();
    handovers
        .iter()
        .enumerate()
        .map(|(index, h)| {
            let from = by_id
                .get(h.from_id.as_str())
                .map(|t| display_name(t))
                .unwrap_or_else(|| h.from_id.clone());
            let to = by_id
                .get(h.to_id.as_str())
                .map(|t| display_name(t))
                .unwrap_or_else(|| h.to_id.clone());
            let mut line = format!("{}. {from} -> {to}", index + 1);
            if let Some(date) = h.date {
                line.push_str(&format!(" ({date})"));
            }
            if let Some(notes) = &h.notes {
                line.push_str(&format!(" - {notes}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_name(task: &TaskItem) -> String {
    if task.name.is_empty() {
        task.id.clone()
    } else {
        task.name.clone()
    }
}
