//! Shared task builders for the task module tests.

use crate::task::domain::{Task, TaskId};

pub(super) fn id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}

pub(super) fn task(raw_id: &str, title: &str) -> Task {
    Task::new(id(raw_id), title).expect("valid task")
}

pub(super) fn child(raw_id: &str, title: &str, parent: &str) -> Task {
    task(raw_id, title).with_parent(id(parent))
}

pub(super) fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(|task| task.id().as_str()).collect()
}
