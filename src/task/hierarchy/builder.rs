//! Forest construction with orphan promotion and cycle breaking.

use crate::task::domain::{Task, TaskHierarchy, TaskId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Data-quality counters collected while building a forest.
///
/// None of these conditions is an error. They are surfaced so callers can
/// alert on bad upstream data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyReport {
    /// Records dropped because an earlier record had the same id.
    pub duplicates_dropped: usize,
    /// Tasks whose parent id did not resolve and were promoted to roots.
    pub orphans_promoted: usize,
    /// Parent links cut because following them would revisit a task.
    pub cycles_broken: usize,
}

impl HierarchyReport {
    /// Returns `true` when the input needed no repair: no duplicate was
    /// dropped, no orphan promoted and no cycle cut.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.duplicates_dropped == 0 && self.orphans_promoted == 0 && self.cycles_broken == 0
    }
}

/// Root-level hierarchy nodes plus the report describing how they were built.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    roots: Vec<TaskHierarchy>,
    report: HierarchyReport,
}

impl Forest {
    /// Returns the roots in discovery order.
    #[must_use]
    pub fn roots(&self) -> &[TaskHierarchy] {
        &self.roots
    }

    /// Returns the build report.
    #[must_use]
    pub const fn report(&self) -> HierarchyReport {
        self.report
    }

    /// Total number of tasks placed in the forest.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.roots.iter().map(TaskHierarchy::len).sum()
    }

    /// Consumes the forest, returning its roots.
    #[must_use]
    pub fn into_roots(self) -> Vec<TaskHierarchy> {
        self.roots
    }
}

/// Builds the task forest from a flat list of tasks.
///
/// * Duplicate ids: the first record wins, later ones are dropped.
/// * A parent id that matches no task promotes the task to a root.
/// * Tasks caught in a parent cycle are promoted to roots in discovery order
///   after the regular roots; the link that would revisit a task is cut.
///
/// Every surviving task is placed exactly once. Siblings keep their input
/// order. The traversal uses an explicit stack.
#[must_use]
pub fn build_forest(tasks: impl IntoIterator<Item = Task>) -> Forest {
    let mut report = HierarchyReport::default();
    let (mut slots, positions) = index_tasks(tasks, &mut report);
    let (children, regular_roots) = link_children(&slots, &positions, &mut report);

    let mut walk = Walk::new(slots.len());
    let mut root_order = Vec::with_capacity(regular_roots.len());
    for root in regular_roots {
        walk.visit(root, &children, &slots, &mut report);
        root_order.push(root);
    }
    for index in 0..slots.len() {
        if walk.is_placed(index) {
            continue;
        }
        if let Some(Some(task)) = slots.get(index) {
            warn!(task_id = %task.id(), "task is part of a parent cycle; promoting to root");
        }
        walk.visit(index, &children, &slots, &mut report);
        root_order.push(index);
    }

    let roots = walk.assemble(&mut slots, &root_order);
    Forest { roots, report }
}

fn index_tasks(
    tasks: impl IntoIterator<Item = Task>,
    report: &mut HierarchyReport,
) -> (Vec<Option<Task>>, HashMap<TaskId, usize>) {
    let mut slots = Vec::new();
    let mut positions = HashMap::new();
    for task in tasks {
        if positions.contains_key(task.id()) {
            warn!(task_id = %task.id(), "duplicate task id; keeping the first record");
            report.duplicates_dropped += 1;
            continue;
        }
        positions.insert(task.id().clone(), slots.len());
        slots.push(Some(task));
    }
    (slots, positions)
}

fn link_children(
    slots: &[Option<Task>],
    positions: &HashMap<TaskId, usize>,
    report: &mut HierarchyReport,
) -> (Vec<Vec<usize>>, Vec<usize>) {
    let mut children = vec![Vec::new(); slots.len()];
    let mut roots = Vec::new();
    for (index, slot) in slots.iter().enumerate() {
        let Some(task) = slot else { continue };
        let Some(parent_id) = task.parent_id() else {
            roots.push(index);
            continue;
        };
        if let Some(siblings) = positions
            .get(parent_id)
            .and_then(|parent| children.get_mut(*parent))
        {
            siblings.push(index);
        } else {
            debug!(task_id = %task.id(), parent_id = %parent_id, "parent not found; promoting to root");
            report.orphans_promoted += 1;
            roots.push(index);
        }
    }
    (children, roots)
}

/// Traversal state shared by every root walk of one build.
struct Walk {
    placed: Vec<bool>,
    accepted: Vec<Vec<usize>>,
    preorder: Vec<usize>,
}

impl Walk {
    fn new(len: usize) -> Self {
        Self {
            placed: vec![false; len],
            accepted: vec![Vec::new(); len],
            preorder: Vec::with_capacity(len),
        }
    }

    fn is_placed(&self, index: usize) -> bool {
        self.placed.get(index).copied().unwrap_or(true)
    }

    fn mark_placed(&mut self, index: usize) {
        if let Some(flag) = self.placed.get_mut(index) {
            *flag = true;
        }
    }

    /// Walks the subtree under `root`, accepting each child the first time
    /// it is seen. A child that is already placed can only be an ancestor
    /// promoted out of a cycle, so its link is cut.
    fn visit(
        &mut self,
        root: usize,
        children: &[Vec<usize>],
        slots: &[Option<Task>],
        report: &mut HierarchyReport,
    ) {
        self.mark_placed(root);
        let mut pending = vec![root];
        while let Some(index) = pending.pop() {
            self.preorder.push(index);
            let mut kept = Vec::new();
            for &child in children.get(index).map(Vec::as_slice).unwrap_or_default() {
                if self.is_placed(child) {
                    if let Some(Some(task)) = slots.get(child) {
                        warn!(task_id = %task.id(), "parent cycle detected; cutting link");
                    }
                    report.cycles_broken += 1;
                    continue;
                }
                self.mark_placed(child);
                kept.push(child);
            }
            pending.extend(kept.iter().rev());
            if let Some(slot) = self.accepted.get_mut(index) {
                *slot = kept;
            }
        }
    }

    /// Builds nodes bottom-up: in reverse pre-order every child is finished
    /// before its parent is assembled.
    fn assemble(self, slots: &mut [Option<Task>], root_order: &[usize]) -> Vec<TaskHierarchy> {
        let mut built: Vec<Option<TaskHierarchy>> = Vec::new();
        built.resize_with(slots.len(), || None);

        for &index in self.preorder.iter().rev() {
            let Some(task) = slots.get_mut(index).and_then(Option::take) else {
                continue;
            };
            let kids = self
                .accepted
                .get(index)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .filter_map(|child| built.get_mut(*child).and_then(Option::take))
                .collect();
            if let Some(slot) = built.get_mut(index) {
                *slot = Some(TaskHierarchy::with_children(task, kids));
            }
        }

        root_order
            .iter()
            .filter_map(|root| built.get_mut(*root).and_then(Option::take))
            .collect()
    }
}
