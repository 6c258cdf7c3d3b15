//! Conversion of wire records into canonical domain values.
//!
//! Malformed records are rejected individually; unparseable optional fields
//! are dropped with a warning while the rest of the record survives.

use super::{WireId, WireNumber, WireTask, WireTaskHierarchy, WireTimestamp, WireUser};
use crate::task::domain::{
    Task, TaskHierarchy, TaskId, TaskPriority, TaskStatus, TaskType, User, UserId, UserRole,
    timestamp,
};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a wire record cannot become a domain value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizationError {
    /// The task record carries no usable id.
    #[error("task record has no id")]
    MissingId,

    /// The task record has a blank title.
    #[error("task {0} has no title")]
    MissingTitle(TaskId),

    /// The user record carries no usable id.
    #[error("user record has no id")]
    MissingUserId,
}

/// Outcome of normalizing a flat task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTasks {
    /// Records that normalized cleanly, in input order.
    pub tasks: Vec<Task>,
    /// Why each rejected record was dropped.
    pub rejected: Vec<NormalizationError>,
}

/// Outcome of normalizing server-built hierarchies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedHierarchy {
    /// Valid roots in input order.
    pub roots: Vec<TaskHierarchy>,
    /// Why each skipped node was dropped.
    pub rejected: Vec<NormalizationError>,
}

/// Converts one wire record into a [`Task`].
///
/// Missing type and status fall back to the task service defaults
/// (`TASK`, `TODO`). Unknown priorities are dropped. Progress is clamped
/// into `0..=100` and negative estimates to zero.
///
/// # Errors
///
/// Returns [`NormalizationError::MissingId`] or
/// [`NormalizationError::MissingTitle`] for records that cannot be shown.
pub fn normalize_task(wire: WireTask) -> Result<Task, NormalizationError> {
    let id = wire
        .id
        .as_ref()
        .and_then(task_id)
        .ok_or(NormalizationError::MissingId)?;
    let Some(title) = wire.title.filter(|title| !title.trim().is_empty()) else {
        return Err(NormalizationError::MissingTitle(id));
    };
    let mut task =
        Task::new(id.clone(), title).map_err(|_| NormalizationError::MissingTitle(id.clone()))?;

    if let Some(description) = wire.description.filter(|text| !text.trim().is_empty()) {
        task = task.with_description(description);
    }
    if let Some(label) = wire.task_type.as_deref() {
        task = task.with_type(TaskType::from(label));
    }
    if let Some(label) = wire.status.as_deref() {
        task = task.with_status(TaskStatus::from(label));
    }
    if let Some(priority) = wire.priority.as_deref().and_then(|label| parse_priority(label, &id)) {
        task = task.with_priority(priority);
    }
    if let Some(assignee) = wire.assignee_id.as_ref().and_then(user_id) {
        task = task.with_assignee(assignee);
    }
    if let Some(parent) = wire.parent_id.as_ref().and_then(task_id) {
        task = task.with_parent(parent);
    }
    if let Some(start) = resolve_timestamp(wire.start_time.as_ref(), "start_time", &id) {
        task = task.with_start_time(start);
    }
    if let Some(due) = resolve_timestamp(wire.due_date.as_ref(), "due_date", &id) {
        task = task.with_due_date(due);
    }
    if let Some(progress) = resolve_number(wire.progress.as_ref(), "progress", &id) {
        task = task.with_progress(progress);
    }
    if let Some(hours) = resolve_number(wire.estimated_hours.as_ref(), "estimated_hours", &id) {
        task = task.with_estimated_hours(hours);
    }

    let created_at = resolve_timestamp(wire.created_at.as_ref(), "created_at", &id);
    let updated_at = resolve_timestamp(wire.updated_at.as_ref(), "updated_at", &id);
    Ok(task.with_audit(created_at, updated_at))
}

/// Normalizes a flat list, dropping malformed records with a warning.
#[must_use]
pub fn normalize_tasks(records: impl IntoIterator<Item = WireTask>) -> NormalizedTasks {
    let mut normalized = NormalizedTasks::default();
    for record in records {
        match normalize_task(record) {
            Ok(task) => normalized.tasks.push(task),
            Err(err) => {
                warn!(error = %err, "skipping malformed task record");
                normalized.rejected.push(err);
            }
        }
    }
    normalized
}

/// Decodes and normalizes the JSON body of `GET /tasks`.
///
/// # Errors
///
/// Returns the decoding error when the body is not a JSON array of objects.
pub fn parse_tasks_json(body: &str) -> Result<NormalizedTasks, serde_json::Error> {
    let records: Vec<WireTask> = serde_json::from_str(body)?;
    Ok(normalize_tasks(records))
}

/// Converts server-built hierarchies into domain nodes.
///
/// A malformed node is skipped with a warning and its children take its
/// place under the nearest valid ancestor, or become roots when no valid
/// ancestor exists. Sibling order is preserved. The walk is iterative.
#[must_use]
pub fn normalize_hierarchy(
    roots: impl IntoIterator<Item = WireTaskHierarchy>,
) -> NormalizedHierarchy {
    struct Entry {
        task: Option<Task>,
        children: Vec<usize>,
    }

    let mut arena: Vec<Entry> = Vec::new();
    let mut top = Vec::new();
    let mut rejected = Vec::new();
    let mut pending: Vec<(WireTaskHierarchy, Option<usize>)> =
        roots.into_iter().map(|root| (root, None)).collect();
    pending.reverse();

    while let Some((node, anchor)) = pending.pop() {
        let WireTaskHierarchy { task, sub_tasks } = node;
        let child_anchor = match normalize_task(task) {
            Ok(valid) => {
                let index = arena.len();
                arena.push(Entry {
                    task: Some(valid),
                    children: Vec::new(),
                });
                match anchor.and_then(|parent| arena.get_mut(parent)) {
                    Some(parent) => parent.children.push(index),
                    None => top.push(index),
                }
                Some(index)
            }
            Err(err) => {
                warn!(error = %err, "skipping malformed hierarchy node; keeping its children");
                rejected.push(err);
                anchor
            }
        };
        pending.extend(
            sub_tasks
                .unwrap_or_default()
                .into_iter()
                .rev()
                .map(|child| (child, child_anchor)),
        );
    }

    // Arena order is pre-order, so children always sit after their parent.
    let mut built: Vec<Option<TaskHierarchy>> = Vec::new();
    built.resize_with(arena.len(), || None);
    for (index, entry) in arena.iter_mut().enumerate().rev() {
        let Some(task) = entry.task.take() else {
            continue;
        };
        let children = entry
            .children
            .iter()
            .filter_map(|child| built.get_mut(*child).and_then(Option::take))
            .collect();
        if let Some(slot) = built.get_mut(index) {
            *slot = Some(TaskHierarchy::with_children(task, children));
        }
    }

    NormalizedHierarchy {
        roots: top
            .iter()
            .filter_map(|index| built.get_mut(*index).and_then(Option::take))
            .collect(),
        rejected,
    }
}

/// Converts a user record for the assignee directory.
///
/// # Errors
///
/// Returns [`NormalizationError::MissingUserId`] when the id is absent.
pub fn normalize_user(wire: WireUser) -> Result<User, NormalizationError> {
    let id = wire
        .id
        .as_ref()
        .and_then(user_id)
        .ok_or(NormalizationError::MissingUserId)?;
    Ok(User {
        name: wire.name.unwrap_or_else(|| format!("User #{id}")),
        email: wire.email.unwrap_or_default(),
        role: wire.role.as_deref().map(UserRole::from).unwrap_or_default(),
        company: wire.company.unwrap_or_default(),
        department: wire.department.unwrap_or_default(),
        position: wire.position.unwrap_or_default(),
        created_at: resolve_timestamp(wire.created_at.as_ref(), "created_at", &id),
        updated_at: resolve_timestamp(wire.updated_at.as_ref(), "updated_at", &id),
        id,
    })
}

/// Zero, numeric or textual, is how the services encode "no reference".
fn task_id(raw: &WireId) -> Option<TaskId> {
    match raw {
        WireId::Number(0) => None,
        WireId::Number(value) => Some(TaskId::from_number(*value)),
        WireId::Text(text) => TaskId::new(text.as_str())
            .ok()
            .filter(|id| id.as_str() != "0"),
    }
}

fn user_id(raw: &WireId) -> Option<UserId> {
    match raw {
        WireId::Number(0) => None,
        WireId::Number(value) => Some(UserId::from_number(*value)),
        WireId::Text(text) => UserId::new(text.as_str())
            .ok()
            .filter(|id| id.as_str() != "0"),
    }
}

fn parse_priority(label: &str, id: &TaskId) -> Option<TaskPriority> {
    if label.trim().is_empty() {
        return None;
    }
    match TaskPriority::try_from(label) {
        Ok(priority) => Some(priority),
        Err(err) => {
            debug!(task_id = %id, error = %err, "unknown priority; using default colours");
            None
        }
    }
}

fn resolve_timestamp(
    raw: Option<&WireTimestamp>,
    field: &'static str,
    id: &impl fmt::Display,
) -> Option<DateTime<Utc>> {
    let parsed = match raw? {
        WireTimestamp::Epoch(0) => return None,
        WireTimestamp::Text(text) if text.trim().is_empty() => return None,
        WireTimestamp::Epoch(epoch) => timestamp::from_epoch(*epoch),
        WireTimestamp::FractionalEpoch(epoch) => {
            float_to_i64(*epoch).and_then(timestamp::from_epoch)
        }
        WireTimestamp::Text(text) => timestamp::parse_timestamp(text),
    };
    if parsed.is_none() {
        warn!(record_id = %id, raw = ?raw, field, "failed to parse timestamp; dropping value");
    }
    parsed
}

fn resolve_number(
    raw: Option<&WireNumber>,
    field: &'static str,
    id: &impl fmt::Display,
) -> Option<i64> {
    let parsed = match raw? {
        WireNumber::Integer(value) => Some(*value),
        WireNumber::Fractional(value) => float_to_i64(*value),
        WireNumber::Text(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_i64))
        }
    };
    if parsed.is_none() {
        warn!(record_id = %id, raw = ?raw, field, "failed to parse number; dropping value");
    }
    parsed
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates and every caller clamps afterwards"
)]
fn float_to_i64(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}
