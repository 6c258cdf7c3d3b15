//! Task list filtering and overdue detection.

use crate::task::domain::{Task, TaskId, UserId};
use chrono::{DateTime, Utc};

/// Criteria applied to a task list. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: Option<String>,
    assignee: Option<UserId>,
    parent: Option<TaskId>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches tasks whose title or description contains `query`, ignoring
    /// case. A blank query is ignored.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.trim().to_lowercase();
        self.query = (!needle.is_empty()).then_some(needle);
        self
    }

    /// Matches tasks assigned to `assignee`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Matches direct children of `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: TaskId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_query(task)
            && self
                .assignee
                .as_ref()
                .is_none_or(|assignee| task.assignee() == Some(assignee))
            && self
                .parent
                .as_ref()
                .is_none_or(|parent| task.parent_id() == Some(parent))
    }

    /// Keeps the matching tasks, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    fn matches_query(&self, task: &Task) -> bool {
        let Some(needle) = self.query.as_deref() else {
            return true;
        };
        task.title().to_lowercase().contains(needle)
            || task
                .description()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }
}

/// Returns `true` when the task's due date lies strictly before `now`.
///
/// Tasks without a due date are never overdue.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.due_date().is_some_and(|due| due < now)
}
