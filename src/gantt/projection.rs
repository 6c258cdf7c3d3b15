//! Forest-to-timeline projection.

use super::{BarKind, GanttBar, ProjectionConfig, palette};
use crate::task::adapters::wire::{WireTaskHierarchy, normalize_hierarchy};
use crate::task::domain::{Task, TaskHierarchy, TaskId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::debug;

/// Counters describing fallbacks taken during a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionReport {
    /// Malformed nodes left out of the output.
    pub skipped_nodes: usize,
    /// Bars whose start fell back to the projection instant.
    pub defaulted_starts: usize,
    /// Bars whose end fell back to start plus the default duration.
    pub defaulted_ends: usize,
    /// Bars whose due date preceded the start and was clamped to it.
    pub inverted_windows: usize,
}

/// Ordered bars plus the report describing how they were derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    bars: Vec<GanttBar>,
    report: ProjectionReport,
}

impl Projection {
    /// Returns the bars in pre-order.
    #[must_use]
    pub fn bars(&self) -> &[GanttBar] {
        &self.bars
    }

    /// Returns the projection report.
    #[must_use]
    pub const fn report(&self) -> ProjectionReport {
        self.report
    }

    /// Finds the bar for a task.
    #[must_use]
    pub fn bar(&self, id: &TaskId) -> Option<&GanttBar> {
        self.bars.iter().find(|bar| &bar.id == id)
    }

    /// Folds or unfolds every group without re-projecting.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        for bar in &mut self.bars {
            bar.collapse_hint = collapsed;
        }
    }

    /// Flips the fold state of every bar, returning the new state.
    ///
    /// An empty projection counts as expanded.
    pub fn toggle_collapsed(&mut self) -> bool {
        let collapsed = !self.bars.first().is_some_and(|bar| bar.collapse_hint);
        self.set_collapsed(collapsed);
        collapsed
    }

    /// Consumes the projection, returning the bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<GanttBar> {
        self.bars
    }
}

/// Projects a forest, reading "now" from `clock` once for the whole call.
#[must_use]
pub fn project(
    forest: &[TaskHierarchy],
    config: &ProjectionConfig,
    clock: &impl Clock,
) -> Projection {
    project_at(forest, config, clock.utc())
}

/// Projects server-built hierarchies straight from their wire form.
///
/// Malformed nodes are skipped with a warning and counted in
/// [`ProjectionReport::skipped_nodes`]; their children are still projected
/// under the nearest valid ancestor.
#[must_use]
pub fn project_wire(
    roots: impl IntoIterator<Item = WireTaskHierarchy>,
    config: &ProjectionConfig,
    clock: &impl Clock,
) -> Projection {
    let normalized = normalize_hierarchy(roots);
    let mut projection = project(&normalized.roots, config, clock);
    projection.report.skipped_nodes += normalized.rejected.len();
    projection
}

/// Projects a forest as seen at instant `now`.
///
/// Bars come out in depth-first pre-order: a parent precedes all of its
/// descendants and siblings keep their forest order. Missing starts resolve
/// to `now`; missing due dates to start plus the configured default
/// duration. The tasks themselves are never modified.
#[must_use]
pub fn project_at(
    forest: &[TaskHierarchy],
    config: &ProjectionConfig,
    now: DateTime<Utc>,
) -> Projection {
    let default_duration = config.default_duration();
    let collapse_hint = !config.expand_all;
    let mut report = ProjectionReport::default();
    let mut bars = Vec::with_capacity(forest.iter().map(TaskHierarchy::len).sum());

    let mut pending: Vec<(&TaskHierarchy, Option<&TaskId>, usize)> =
        forest.iter().rev().map(|root| (root, None, 0)).collect();
    while let Some((node, parent, depth)) = pending.pop() {
        let task = node.task();
        let (start, end) = schedule_window(task, now, default_duration, &mut report);
        bars.push(GanttBar {
            id: task.id().clone(),
            label: task.title().to_owned(),
            start,
            end,
            progress: task.progress(),
            dependency_ids: parent.into_iter().cloned().collect(),
            kind: if node.is_group() {
                BarKind::Group
            } else {
                BarKind::Leaf
            },
            collapse_hint,
            style: palette::bar_style(task.priority()),
            depth,
            priority: task.priority(),
            assignee: task.assignee().cloned(),
        });
        pending.extend(
            node.children()
                .iter()
                .rev()
                .map(|child| (child, Some(node.id()), depth + 1)),
        );
    }

    Projection { bars, report }
}

fn schedule_window(
    task: &Task,
    now: DateTime<Utc>,
    default_duration: TimeDelta,
    report: &mut ProjectionReport,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = match task.start_time() {
        Some(explicit) => explicit,
        None => {
            report.defaulted_starts += 1;
            now
        }
    };
    let end = match task.due_date() {
        Some(due) if due < start => {
            debug!(task_id = %task.id(), %due, %start, "due date precedes start; clamping");
            report.inverted_windows += 1;
            start
        }
        Some(due) => due,
        None => {
            report.defaulted_ends += 1;
            start.checked_add_signed(default_duration).unwrap_or(start)
        }
    };
    (start, end)
}
