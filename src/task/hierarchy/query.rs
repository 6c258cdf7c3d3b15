//! Parent-link queries over a flat task list.

use crate::task::domain::{Task, TaskId};
use std::collections::{HashMap, HashSet};

/// Returns every transitive child of `id`, nearest generations first.
///
/// Terminates on cyclic input; `id` itself is never part of the result.
#[must_use]
pub fn descendant_ids(tasks: &[Task], id: &TaskId) -> Vec<TaskId> {
    let mut children: HashMap<&TaskId, Vec<&TaskId>> = HashMap::new();
    for task in tasks {
        if let Some(parent) = task.parent_id() {
            children.entry(parent).or_default().push(task.id());
        }
    }

    let mut seen: HashSet<&TaskId> = HashSet::from([id]);
    let mut found = Vec::new();
    let mut frontier = vec![id];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for parent in frontier {
            for &child in children.get(parent).map(Vec::as_slice).unwrap_or_default() {
                if seen.insert(child) {
                    found.push(child.clone());
                    next.push(child);
                }
            }
        }
        frontier = next;
    }
    found
}

/// Returns the tasks that may become the parent of `id` without creating a
/// cycle: everything except the task itself and its descendants.
#[must_use]
pub fn parent_candidates<'a>(tasks: &'a [Task], id: &TaskId) -> Vec<&'a Task> {
    let excluded: HashSet<TaskId> = descendant_ids(tasks, id).into_iter().collect();
    tasks
        .iter()
        .filter(|task| task.id() != id && !excluded.contains(task.id()))
        .collect()
}
