//! Render-ready timeline bars.

use crate::task::domain::{Progress, TaskId, TaskPriority, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Whether a bar summarises children or stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    /// The task has at least one child.
    Group,
    /// The task has no children.
    Leaf,
}

impl BarKind {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Leaf => "leaf",
        }
    }
}

/// Fill colours of a bar, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BarStyle {
    /// Bar body colour.
    pub background: &'static str,
    /// Colour of the completed portion.
    pub progress: &'static str,
}

impl BarStyle {
    /// Creates a style from two colours.
    #[must_use]
    pub const fn new(background: &'static str, progress: &'static str) -> Self {
        Self {
            background,
            progress,
        }
    }
}

/// One bar on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttBar {
    /// Task the bar represents.
    pub id: TaskId,
    /// Display label.
    pub label: String,
    /// Resolved start.
    pub start: DateTime<Utc>,
    /// Resolved end; never before `start`.
    pub end: DateTime<Utc>,
    /// Completion percentage.
    pub progress: Progress,
    /// The parent bar's id, or empty for roots.
    pub dependency_ids: Vec<TaskId>,
    /// Group or leaf.
    pub kind: BarKind,
    /// `true` when the bar's children start folded.
    pub collapse_hint: bool,
    /// Priority colours.
    pub style: BarStyle,
    /// Nesting level; roots are at zero.
    pub depth: usize,
    /// Priority the style was derived from.
    pub priority: Option<TaskPriority>,
    /// Assigned user, for label joins.
    pub assignee: Option<UserId>,
}

impl GanttBar {
    /// Length of the bar.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Returns `true` for group bars.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self.kind, BarKind::Group)
    }

    /// Start as epoch milliseconds.
    #[must_use]
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// End as epoch milliseconds.
    #[must_use]
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp_millis()
    }
}
