//! Derived parent/child tree over tasks.

use super::{Task, TaskId};
use std::fmt;

/// One task together with its ordered children.
///
/// Nodes are built per render cycle and discarded once projected. Cloning,
/// comparing, formatting and dropping all walk the subtree with an explicit
/// work list, so long parent chains cannot exhaust the stack.
pub struct TaskHierarchy {
    task: Task,
    children: Vec<TaskHierarchy>,
}

impl TaskHierarchy {
    /// Creates a leaf node.
    #[must_use]
    pub const fn new(task: Task) -> Self {
        Self {
            task,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, keeping their order.
    #[must_use]
    pub const fn with_children(task: Task, children: Vec<Self>) -> Self {
        Self { task, children }
    }

    /// Appends a child after the existing ones.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns the wrapped task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the wrapped task's identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        self.task.id()
    }

    /// Returns the direct children in discovery order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns `true` when the node has at least one child.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Counts this node and all of its descendants.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Always `false`: a node contains at least its own task.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Visits this node and its descendants in pre-order, yielding each task
    /// with its depth below this node.
    #[must_use]
    pub fn preorder(&self) -> Vec<(usize, &Task)> {
        let mut visited = Vec::new();
        let mut pending = vec![(0_usize, self)];
        while let Some((depth, node)) = pending.pop() {
            visited.push((depth, &node.task));
            pending.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
        visited
    }
}

impl Clone for TaskHierarchy {
    fn clone(&self) -> Self {
        let mut order = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.children.iter().rev());
        }

        // In reverse pre-order a node's children sit on top of `finished`,
        // last sibling lowest.
        let mut finished: Vec<Self> = Vec::with_capacity(order.len());
        for node in order.iter().rev() {
            let split = finished.len().saturating_sub(node.children.len());
            let mut children = finished.split_off(split);
            children.reverse();
            finished.push(Self::with_children(node.task.clone(), children));
        }
        finished
            .pop()
            .unwrap_or_else(|| Self::new(self.task.clone()))
    }
}

impl PartialEq for TaskHierarchy {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.task != right.task || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl Eq for TaskHierarchy {}

impl fmt::Debug for TaskHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descendants: Vec<(usize, &TaskId)> = self
            .preorder()
            .into_iter()
            .skip(1)
            .map(|(depth, task)| (depth, task.id()))
            .collect();
        f.debug_struct("TaskHierarchy")
            .field("task", &self.task)
            .field("descendants", &descendants)
            .finish()
    }
}

impl Drop for TaskHierarchy {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
