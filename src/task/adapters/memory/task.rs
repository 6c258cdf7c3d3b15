//! In-memory task source for tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::wire::{WireId, WireTask, WireTaskHierarchy},
    domain::TaskId,
    ports::{SessionContext, TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory stand-in for the REST task service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<WireTask>,
    hierarchies: HashMap<TaskId, WireTaskHierarchy>,
    required_token: Option<String>,
}

impl InMemoryTaskSource {
    /// Creates an empty source that accepts any session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source serving `tasks` from `GET /tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = WireTask>) -> Self {
        let source = Self::new();
        if let Ok(mut state) = source.state.write() {
            state.tasks = tasks.into_iter().collect();
        }
        source
    }

    /// Rejects sessions whose bearer token differs from `token`.
    #[must_use]
    pub fn requiring_token(self, token: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.required_token = Some(token.into());
        }
        self
    }

    /// Serves `hierarchy` from `GET /tasks/hierarchy/{root}`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] if the state lock is poisoned.
    pub fn put_hierarchy(
        &self,
        root: TaskId,
        hierarchy: WireTaskHierarchy,
    ) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.hierarchies.insert(root, hierarchy);
        Ok(())
    }

    /// Appends a record, as `POST /tasks` would.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] if the state lock is poisoned.
    pub fn insert(&self, task: WireTask) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.tasks.push(task);
        Ok(())
    }

    /// Replaces the record with the same id, as `PUT /tasks/{id}` would.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when no record has that id.
    pub fn update(&self, id: &TaskId, task: WireTask) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|existing| matches_id(existing.id.as_ref(), id))
            .ok_or_else(|| TaskSourceError::NotFound(id.clone()))?;
        *slot = task;
        Ok(())
    }

    /// Removes the record with the given id, as `DELETE /tasks/{id}` would.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when no record has that id.
    pub fn remove(&self, id: &TaskId) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let before = state.tasks.len();
        state.tasks.retain(|existing| !matches_id(existing.id.as_ref(), id));
        if state.tasks.len() == before {
            return Err(TaskSourceError::NotFound(id.clone()));
        }
        state.hierarchies.remove(id);
        Ok(())
    }

    fn authorize(state: &InMemoryTaskState, session: &SessionContext) -> TaskSourceResult<()> {
        match state.required_token.as_deref() {
            Some(token) if token != session.bearer_token() => Err(TaskSourceError::Unauthorized),
            _ => Ok(()),
        }
    }
}

fn matches_id(candidate: Option<&WireId>, id: &TaskId) -> bool {
    match candidate {
        Some(WireId::Number(value)) => value.to_string() == id.as_str(),
        Some(WireId::Text(text)) => text.trim() == id.as_str(),
        None => false,
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> TaskSourceError {
    TaskSourceError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn fetch_tasks(&self, session: &SessionContext) -> TaskSourceResult<Vec<WireTask>> {
        let state = self.state.read().map_err(poisoned)?;
        Self::authorize(&state, session)?;
        Ok(state.tasks.clone())
    }

    async fn fetch_hierarchy(
        &self,
        session: &SessionContext,
        root: &TaskId,
    ) -> TaskSourceResult<WireTaskHierarchy> {
        let state = self.state.read().map_err(poisoned)?;
        Self::authorize(&state, session)?;
        state
            .hierarchies
            .get(root)
            .cloned()
            .ok_or_else(|| TaskSourceError::NotFound(root.clone()))
    }
}
